mod common;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use coaching_site::domain::booking::BookingRequest;
use coaching_site::gateways::mock::MockGateway;
use coaching_site::http::handlers::booking::{email_status, submit_booking};
use coaching_site::mailer::mock::MockMailer;

fn booking() -> BookingRequest {
    BookingRequest {
        name: "Ravi Kumar".to_string(),
        email: "ravi@example.com".to_string(),
        date: "2026-11-05".to_string(),
        hour: "4".to_string(),
        minute: "00".to_string(),
        period: "PM".to_string(),
        message: Some("Retirement planning".to_string()),
        timezone: "Asia/Kolkata".to_string(),
    }
}

#[tokio::test]
async fn valid_booking_sends_one_email() {
    let mailer = MockMailer::default();
    let state = common::state_with(MockGateway::new("ALWAYS_SUCCESS"), mailer.clone());

    let resp = submit_booking(State(state), common::body(&booking())).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(body["success"], true);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_name, "Aayush");
    assert_eq!(sent[0].from_name, "Ravi Kumar");
    assert_eq!(sent[0].from_email, "ravi@example.com");
    assert_eq!(sent[0].meeting_time, "4:00 PM");
    assert_eq!(sent[0].message, "Retirement planning");
}

#[tokio::test]
async fn invalid_booking_is_rejected_before_sending() {
    let mailer = MockMailer::default();
    let state = common::state_with(MockGateway::new("ALWAYS_SUCCESS"), mailer.clone());

    let req = BookingRequest {
        minute: "45".to_string(),
        ..booking()
    };
    let resp = submit_booking(State(state), common::body(&req)).await.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = common::json_body(resp).await;
    assert_eq!(body, serde_json::json!({"error": "Minute must be 00 or 30"}));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn unconfigured_mailer_is_unavailable() {
    let state = common::state_with(
        MockGateway::new("ALWAYS_SUCCESS"),
        MockMailer::unconfigured(&["EMAILJS_SERVICE_ID"]),
    );
    let resp = submit_booking(State(state), common::body(&booking())).await.into_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = common::json_body(resp).await;
    assert_eq!(body["error"], "Email service is not configured");
}

#[tokio::test]
async fn mailer_failure_is_bad_gateway() {
    let state = common::state_with(MockGateway::new("ALWAYS_SUCCESS"), MockMailer::failing());
    let resp = submit_booking(State(state), common::body(&booking())).await.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = common::json_body(resp).await;
    assert_eq!(body, serde_json::json!({"error": "Failed to send email"}));
}

#[tokio::test]
async fn email_status_lists_missing_keys() {
    let state = common::state_with(
        MockGateway::new("ALWAYS_SUCCESS"),
        MockMailer::unconfigured(&["EMAILJS_PUBLIC_KEY", "EMAILJS_TEMPLATE_ID"]),
    );
    let resp = email_status(State(state)).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::json_body(resp).await;
    assert_eq!(
        body,
        serde_json::json!({
            "is_configured": false,
            "missing_keys": ["EMAILJS_PUBLIC_KEY", "EMAILJS_TEMPLATE_ID"]
        })
    );

    let resp = email_status(State(common::state())).await.into_response();
    let body = common::json_body(resp).await;
    assert_eq!(body["is_configured"], true);
}
