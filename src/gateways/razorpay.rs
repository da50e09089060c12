use crate::domain::order::GatewayOrder;
use crate::gateways::{GatewayError, OrderGateway};

pub struct RazorpayGateway {
    pub base_url: String,
    pub key_id: String,
    pub key_secret: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[async_trait::async_trait]
impl OrderGateway for RazorpayGateway {
    fn name(&self) -> &'static str {
        "razorpay"
    }

    async fn create_order(&self, order: &GatewayOrder) -> Result<serde_json::Value, GatewayError> {
        let order_url = format!("{}/v1/orders", self.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(order_url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(order)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => r
                .json::<serde_json::Value>()
                .await
                .map_err(|e| GatewayError::with_message(e.to_string())),
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                tracing::warn!(
                    status = status.as_u16(),
                    body = %body.chars().take(200).collect::<String>(),
                    "razorpay rejected order"
                );
                Err(GatewayError {
                    message: error_description(&body),
                })
            }
            Err(e) if e.is_timeout() => Err(GatewayError::with_message("gateway timeout")),
            Err(e) => Err(GatewayError::with_message(e.to_string())),
        }
    }
}

/// Pulls `error.description` out of a Razorpay error body.
pub fn error_description(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    v.get("error")?
        .get("description")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
