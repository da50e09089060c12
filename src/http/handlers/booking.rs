use crate::domain::booking::BookingRequest;
use crate::domain::error::ApiError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn submit_booking(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let req: BookingRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => return ApiError::InvalidBody(e.to_string()).into_response(),
    };

    match state.booking_service.submit(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn email_status(State(state): State<AppState>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(state.booking_service.status())).into_response()
}
