use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Missing payment verification parameters")]
    MissingVerificationParams,
    #[error("Invalid payment signature")]
    InvalidSignature,
    #[error("{0}")]
    InvalidBooking(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("{}", .0.as_deref().unwrap_or("Failed to create order"))]
    Gateway(Option<String>),
    #[error("{}", .0.as_deref().unwrap_or("Failed to verify payment"))]
    Verification(Option<String>),
    #[error("Email service is not configured")]
    EmailNotConfigured,
    #[error("Failed to send email")]
    EmailSend,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAmount
            | ApiError::MissingVerificationParams
            | ApiError::InvalidSignature
            | ApiError::InvalidBooking(_)
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Gateway(_) | ApiError::Verification(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::EmailNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::EmailSend => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}
