pub mod config;
pub mod domain {
    pub mod booking;
    pub mod error;
    pub mod order;
    pub mod verification;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod booking;
        pub mod ops;
        pub mod payments;
    }
    pub mod routes;
}
pub mod mailer;
pub mod service {
    pub mod booking_service;
    pub mod payment_service;
}
pub mod signature;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
    pub booking_service: service::booking_service::BookingService,
    pub gateway_ready: bool,
}
