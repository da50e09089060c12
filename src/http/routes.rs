use crate::http::handlers::{booking, ops, payments};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/liveness", get(ops::liveness))
        .route("/ops/readiness", get(ops::readiness))
        .route("/api/create-razorpay-order", post(payments::create_order))
        .route("/api/verify-razorpay-payment", post(payments::verify_payment))
        .route("/api/booking", post(booking::submit_booking))
        .route("/api/email-status", get(booking::email_status))
        .with_state(state)
}
