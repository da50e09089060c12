use serde::{Deserialize, Serialize};

/// The three values the checkout redirect hands back to the site.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerificationRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl VerificationRequest {
    /// `(order_id, payment_id, signature)` when all three are present and non-empty.
    pub fn parts(&self) -> Option<(&str, &str, &str)> {
        Some((
            present(&self.razorpay_order_id)?,
            present(&self.razorpay_payment_id)?,
            present(&self.razorpay_signature)?,
        ))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationResult {
    pub success: bool,
    pub message: String,
}

impl VerificationResult {
    pub fn verified() -> Self {
        Self {
            success: true,
            message: "Payment has been verified".to_string(),
        }
    }
}
