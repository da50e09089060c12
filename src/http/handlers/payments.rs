use crate::domain::error::ApiError;
use crate::domain::order::{CreateOrderResponse, OrderRequest};
use crate::domain::verification::VerificationRequest;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

// Bodies are parsed as JSON whatever the Content-Type; checkout pages post
// with `text/plain`.

pub async fn create_order(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let req: OrderRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(error = %e, "error reading order request");
            return ApiError::Gateway(Some(e.to_string())).into_response();
        }
    };

    match state.payment_service.create_order(req).await {
        Ok(order) => (axum::http::StatusCode::OK, Json(CreateOrderResponse { order })).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn verify_payment(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let req: VerificationRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(error = %e, "error reading verification request");
            return ApiError::Verification(Some(e.to_string())).into_response();
        }
    };

    match state.payment_service.verify_payment(&req) {
        Ok(result) => (axum::http::StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    }
}
