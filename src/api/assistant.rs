use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::service::LeaveService;

/// Both fields are optional on the wire so a missing one is reported as a
/// validation error rather than a decode failure.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[schema(example = "What's my balance?")]
    pub message: Option<String>,
    #[schema(example = 1)]
    pub user_id: Option<u64>,
}

/// Ask the leave assistant
#[utoipa::path(
    post,
    path = "/api/ai-chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = crate::models::ChatReply),
        (status = 400, description = "Missing message or userId", body = Object, example = json!({
            "error": "Message and userId are required"
        })),
        (status = 404, description = "User has no balance")
    ),
    tag = "Assistant"
)]
pub async fn chat(
    service: web::Data<LeaveService>,
    payload: web::Json<ChatRequest>,
) -> actix_web::Result<impl Responder> {
    let reply = service.chat(payload.message.as_deref(), payload.user_id)?;
    Ok(HttpResponse::Ok().json(reply))
}
