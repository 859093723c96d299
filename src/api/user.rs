use actix_web::{HttpResponse, Responder, web};

use crate::service::LeaveService;

/// Fetch a user from the directory
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    params(
        ("user_id" = u64, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "User found", body = crate::model::user::User),
        (status = 404, description = "User not found", body = Object, example = json!({
            "error": "User not found"
        }))
    ),
    tag = "User"
)]
pub async fn get_user(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let user = service.user(path.into_inner())?;
    Ok(HttpResponse::Ok().json(user))
}

/// Remaining leave per category
#[utoipa::path(
    get,
    path = "/api/leave-balance/{user_id}",
    params(
        ("user_id" = u64, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Leave balance", body = crate::model::leave_balance::LeaveBalance),
        (status = 404, description = "Balance not found", body = Object, example = json!({
            "error": "Balance not found"
        }))
    ),
    tag = "User"
)]
pub async fn get_leave_balance(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let balance = service.balance(path.into_inner())?;
    Ok(HttpResponse::Ok().json(balance))
}

/// Request counts and approved days for a user
#[utoipa::path(
    get,
    path = "/api/statistics/{user_id}",
    params(
        ("user_id" = u64, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Leave statistics", body = crate::models::LeaveStatistics)
    ),
    tag = "User"
)]
pub async fn get_statistics(
    service: web::Data<LeaveService>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let stats = service.statistics(path.into_inner())?;
    Ok(HttpResponse::Ok().json(stats))
}
