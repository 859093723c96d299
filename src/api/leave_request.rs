use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::model::leave_request::LeaveStatus;
use crate::service::{LeaveService, processor::LeaveSubmission};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecision {
    #[schema(example = "Approved")]
    pub status: LeaveStatus,
    #[schema(example = 3)]
    pub manager_id: u64,
}

/* =========================
List a user's leave requests
========================= */
#[utoipa::path(
    get,
    path = "/api/leave-requests/{user_id}",
    params(
        ("user_id" = u64, Path, description = "Owner of the requests")
    ),
    responses(
        (status = 200, description = "Requests, newest first", body = [crate::model::leave_request::LeaveRequest])
    ),
    tag = "Leave"
)]
pub async fn list_leave_requests(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let requests = service.requests_for_user(path.into_inner())?;
    Ok(HttpResponse::Ok().json(requests))
}

/* =========================
Submit a leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/leave-requests",
    request_body(
        content = LeaveSubmission,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = crate::model::leave_request::LeaveRequest),
        (status = 400, description = "Insufficient balance or invalid payload", body = Object, example = json!({
            "error": "Insufficient annual leave balance"
        })),
        (status = 404, description = "Requester has no balance")
    ),
    tag = "Leave"
)]
pub async fn create_leave_request(
    service: web::Data<LeaveService>,
    payload: web::Json<LeaveSubmission>,
) -> actix_web::Result<impl Responder> {
    let created = service.submit(payload.into_inner())?;
    Ok(HttpResponse::Created().json(created))
}

/* =========================
Approve / reject (manager)
========================= */
#[utoipa::path(
    patch,
    path = "/api/leave-requests/{request_id}",
    params(
        ("request_id" = u64, Path, description = "ID of the leave request to decide")
    ),
    request_body = LeaveDecision,
    responses(
        (status = 200, description = "Decision applied", body = crate::model::leave_request::LeaveRequest),
        (status = 400, description = "Status is not Approved or Rejected"),
        (status = 403, description = "Decider is not a manager", body = Object, example = json!({
            "error": "Unauthorized"
        })),
        (status = 404, description = "Request not found", body = Object, example = json!({
            "error": "Request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn decide_leave_request(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
    payload: web::Json<LeaveDecision>,
) -> actix_web::Result<impl Responder> {
    let request_id = path.into_inner();
    let decision = payload.into_inner();

    let updated = service.decide(request_id, decision.status, decision.manager_id)?;
    info!(request_id, manager_id = decision.manager_id, status = %updated.status, "Leave request decided");

    Ok(HttpResponse::Ok().json(updated))
}

/* =========================
Team view (manager)
========================= */
#[utoipa::path(
    get,
    path = "/api/team-requests/{manager_id}",
    params(
        ("manager_id" = u64, Path, description = "Manager whose direct reports to list")
    ),
    responses(
        (status = 200, description = "Pending requests of direct reports", body = [crate::models::TeamRequest])
    ),
    tag = "Leave"
)]
pub async fn list_team_requests(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let requests = service.team_requests(path.into_inner())?;
    Ok(HttpResponse::Ok().json(requests))
}
