#![allow(dead_code)]

use axum::body::Bytes;
use axum::response::Response;
use coaching_site::gateways::mock::MockGateway;
use coaching_site::mailer::mock::MockMailer;
use coaching_site::service::booking_service::BookingService;
use coaching_site::service::payment_service::PaymentService;
use coaching_site::AppState;
use std::sync::Arc;

pub const SECRET: &str = "s3cr3t";

pub fn state_with(gateway: MockGateway, mailer: MockMailer) -> AppState {
    AppState {
        payment_service: PaymentService::new(Arc::new(gateway), SECRET),
        booking_service: BookingService {
            mailer: Arc::new(mailer),
            recipient_name: "Aayush".to_string(),
        },
        gateway_ready: true,
    }
}

pub fn state() -> AppState {
    state_with(MockGateway::new("ALWAYS_SUCCESS"), MockMailer::default())
}

pub fn body<T: serde::Serialize>(value: &T) -> Bytes {
    Bytes::from(serde_json::to_vec(value).unwrap())
}

pub async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serves the app on an ephemeral port and returns its base URL.
pub async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = coaching_site::http::routes::router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
