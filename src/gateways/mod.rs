use crate::domain::order::GatewayOrder;

pub mod mock;
pub mod razorpay;

/// Failure from a payment gateway. `message` is what the caller gets back;
/// `None` means the gateway gave nothing worth passing through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("gateway error"))]
pub struct GatewayError {
    pub message: Option<String>,
}

impl GatewayError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn silent() -> Self {
        Self { message: None }
    }
}

#[async_trait::async_trait]
pub trait OrderGateway: Send + Sync {
    fn name(&self) -> &'static str;

    /// Creates an order on the gateway and returns its order object as-is.
    /// Not idempotent: each call creates a new order.
    async fn create_order(&self, order: &GatewayOrder) -> Result<serde_json::Value, GatewayError>;
}
