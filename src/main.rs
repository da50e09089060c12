use coaching_site::config::{AppConfig, GatewayMode};
use coaching_site::gateways::mock::MockGateway;
use coaching_site::gateways::razorpay::RazorpayGateway;
use coaching_site::gateways::OrderGateway;
use coaching_site::mailer::emailjs::EmailJsMailer;
use coaching_site::service::booking_service::BookingService;
use coaching_site::service::payment_service::PaymentService;
use coaching_site::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(config = ?cfg, "configuration loaded");

    let client = reqwest::Client::new();

    let gateway: Arc<dyn OrderGateway> = match cfg.gateway_mode {
        GatewayMode::Mock => {
            tracing::warn!("using mock payment gateway");
            Arc::new(MockGateway::new("ALWAYS_SUCCESS"))
        }
        GatewayMode::Razorpay => {
            if !cfg.gateway_credentials_present() {
                tracing::warn!("RAZORPAY_KEY_ID or RAZORPAY_KEY_SECRET is not set");
            }
            Arc::new(RazorpayGateway {
                base_url: cfg.razorpay_base_url.clone(),
                key_id: cfg.razorpay_key_id.clone(),
                key_secret: cfg.razorpay_key_secret.clone(),
                timeout_ms: cfg.gateway_timeout_ms,
                client: client.clone(),
            })
        }
    };

    let mailer = EmailJsMailer::from_config(&cfg, client);
    let booking_service = BookingService {
        mailer: Arc::new(mailer),
        recipient_name: cfg.booking_recipient_name.clone(),
    };
    if !booking_service.mailer.is_configured() {
        tracing::warn!(
            missing = ?booking_service.mailer.missing_keys(),
            "booking email is not configured"
        );
    }

    let state = AppState {
        payment_service: PaymentService::new(gateway, &cfg.razorpay_key_secret),
        booking_service,
        gateway_ready: cfg.gateway_mode == GatewayMode::Mock || cfg.gateway_credentials_present(),
    };

    let app = coaching_site::http::routes::router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
