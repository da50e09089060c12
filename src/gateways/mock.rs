use crate::domain::order::GatewayOrder;
use crate::gateways::{GatewayError, OrderGateway};
use std::sync::{Arc, Mutex};

/// In-process gateway for local runs and tests. Behavior is one of
/// `ALWAYS_SUCCESS` (default), `ALWAYS_FAILURE`, `ALWAYS_FAILURE_SILENT`.
#[derive(Clone, Default)]
pub struct MockGateway {
    pub behavior: String,
    received: Arc<Mutex<Vec<GatewayOrder>>>,
}

impl MockGateway {
    pub fn new(behavior: &str) -> Self {
        Self {
            behavior: behavior.to_string(),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Orders seen so far, in call order.
    pub fn received(&self) -> Vec<GatewayOrder> {
        self.received
            .lock()
            .map(|orders| orders.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl OrderGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_order(&self, order: &GatewayOrder) -> Result<serde_json::Value, GatewayError> {
        if let Ok(mut orders) = self.received.lock() {
            orders.push(order.clone());
        }

        match self.behavior.as_str() {
            "ALWAYS_FAILURE" => Err(GatewayError::with_message("mock gateway declined order")),
            "ALWAYS_FAILURE_SILENT" => Err(GatewayError::silent()),
            _ => Ok(serde_json::json!({
                "id": format!("order_{}", uuid::Uuid::new_v4().simple()),
                "entity": "order",
                "amount": order.amount,
                "amount_paid": 0,
                "amount_due": order.amount,
                "currency": order.currency,
                "receipt": order.receipt,
                "status": "created",
                "attempts": 0,
                "notes": order.notes.clone().unwrap_or_default(),
                "created_at": chrono::Utc::now().timestamp(),
            })),
        }
    }
}
