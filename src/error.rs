use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::model::leave_balance::LeaveCategory;

/// Request-local failures of the leave ledger.
#[derive(Debug, thiserror::Error)]
pub enum LeaveError {
    #[error("User not found")]
    UserNotFound,
    #[error("Balance not found")]
    BalanceNotFound,
    #[error("Request not found")]
    RequestNotFound,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Insufficient {0} leave balance")]
    InsufficientBalance(LeaveCategory),
    #[error("{0}")]
    Validation(String),
    /// A path segment that does not decode to an id.
    #[error("{0}")]
    InvalidPath(String),
    #[error("Internal Server Error")]
    Internal(String),
}

impl LeaveError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl ResponseError for LeaveError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound
            | Self::BalanceNotFound
            | Self::RequestNotFound
            | Self::InvalidPath(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::InsufficientBalance(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Internal(detail) = self {
            tracing::error!(error = %detail, "Internal error");
        }
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
