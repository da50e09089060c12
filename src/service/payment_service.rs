use crate::domain::error::ApiError;
use crate::domain::order::OrderRequest;
use crate::domain::verification::{VerificationRequest, VerificationResult};
use crate::gateways::OrderGateway;
use crate::signature::verify_payment_signature;
use std::sync::Arc;

#[derive(Clone)]
pub struct PaymentService {
    pub gateway: Arc<dyn OrderGateway>,
    pub key_secret: Arc<str>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn OrderGateway>, key_secret: &str) -> Self {
        Self {
            gateway,
            key_secret: Arc::from(key_secret),
        }
    }

    /// Creates one gateway order per call; never retried here.
    pub async fn create_order(&self, req: OrderRequest) -> Result<serde_json::Value, ApiError> {
        let order = req.into_gateway_order().ok_or(ApiError::MissingAmount)?;

        match self.gateway.create_order(&order).await {
            Ok(created) => {
                tracing::info!(
                    gateway = self.gateway.name(),
                    order_id = created.get("id").and_then(|v| v.as_str()).unwrap_or(""),
                    amount = order.amount,
                    currency = %order.currency,
                    "order created"
                );
                Ok(created)
            }
            Err(e) => {
                tracing::error!(gateway = self.gateway.name(), error = %e, "error creating order");
                Err(ApiError::Gateway(e.message))
            }
        }
    }

    pub fn verify_payment(&self, req: &VerificationRequest) -> Result<VerificationResult, ApiError> {
        let (order_id, payment_id, signature) =
            req.parts().ok_or(ApiError::MissingVerificationParams)?;

        let valid = verify_payment_signature(&self.key_secret, order_id, payment_id, signature)
            .map_err(|e| {
                tracing::error!(error = %e, "error verifying payment");
                ApiError::Verification(Some(e.to_string()))
            })?;

        if !valid {
            tracing::warn!(order_id, payment_id, "payment signature mismatch");
            return Err(ApiError::InvalidSignature);
        }

        tracing::info!(order_id, payment_id, "payment verified");
        Ok(VerificationResult::verified())
    }
}
