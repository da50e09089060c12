use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_currency() -> String {
    "INR".to_string()
}

/// Body of `POST /api/create-razorpay-order`. `amount` is in the smallest
/// currency unit (paise for INR).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub notes: Option<BTreeMap<String, String>>,
}

/// The order actually sent to a gateway, after the amount check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayOrder {
    pub amount: u64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<BTreeMap<String, String>>,
}

impl OrderRequest {
    /// Returns `None` when the amount is absent or zero.
    pub fn into_gateway_order(self) -> Option<GatewayOrder> {
        let amount = self.amount.filter(|a| *a > 0)?;
        Some(GatewayOrder {
            amount,
            currency: self.currency,
            receipt: self.receipt,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_defaults_to_inr() {
        let req: OrderRequest = serde_json::from_str(r#"{"amount": 49900}"#).unwrap();
        assert_eq!(req.currency, "INR");
        let order = req.into_gateway_order().unwrap();
        assert_eq!(order.amount, 49900);
        assert!(order.receipt.is_none());
    }

    #[test]
    fn zero_and_null_amounts_are_missing() {
        for body in [r#"{}"#, r#"{"amount": null}"#, r#"{"amount": 0}"#] {
            let req: OrderRequest = serde_json::from_str(body).unwrap();
            assert!(req.into_gateway_order().is_none(), "{body}");
        }
    }

    #[test]
    fn gateway_order_omits_absent_fields() {
        let order = GatewayOrder {
            amount: 100,
            currency: "INR".to_string(),
            receipt: None,
            notes: None,
        };
        let v = serde_json::to_value(&order).unwrap();
        assert_eq!(v, serde_json::json!({"amount": 100, "currency": "INR"}));
    }
}
