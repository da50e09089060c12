#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayMode {
    Razorpay,
    Mock,
}

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub log_level: String,
    pub gateway_mode: GatewayMode,
    pub razorpay_base_url: String,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub gateway_timeout_ms: u64,
    pub emailjs_base_url: String,
    pub emailjs_public_key: Option<String>,
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub email_timeout_ms: u64,
    pub booking_recipient_name: String,
}

// Secrets stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("gateway_mode", &self.gateway_mode)
            .field("razorpay_base_url", &self.razorpay_base_url)
            .field("razorpay_key_id_set", &!self.razorpay_key_id.is_empty())
            .field("razorpay_key_secret_set", &!self.razorpay_key_secret.is_empty())
            .field("gateway_timeout_ms", &self.gateway_timeout_ms)
            .field("emailjs_base_url", &self.emailjs_base_url)
            .field("email_timeout_ms", &self.email_timeout_ms)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            gateway_mode: match lookup("PAYMENT_GATEWAY").as_deref() {
                Some("mock") | Some("MOCK") => GatewayMode::Mock,
                _ => GatewayMode::Razorpay,
            },
            razorpay_base_url: lookup("RAZORPAY_BASE_URL")
                .unwrap_or_else(|| "https://api.razorpay.com".to_string()),
            razorpay_key_id: lookup("RAZORPAY_KEY_ID").unwrap_or_default(),
            razorpay_key_secret: lookup("RAZORPAY_KEY_SECRET").unwrap_or_default(),
            gateway_timeout_ms: lookup("GATEWAY_TIMEOUT_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2500),
            emailjs_base_url: lookup("EMAILJS_BASE_URL")
                .unwrap_or_else(|| "https://api.emailjs.com".to_string()),
            emailjs_public_key: non_empty("EMAILJS_PUBLIC_KEY"),
            emailjs_service_id: non_empty("EMAILJS_SERVICE_ID"),
            emailjs_template_id: non_empty("EMAILJS_TEMPLATE_ID"),
            email_timeout_ms: lookup("EMAIL_TIMEOUT_MS")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(5000),
            booking_recipient_name: lookup("BOOKING_RECIPIENT_NAME")
                .unwrap_or_else(|| "Aayush".to_string()),
        }
    }

    pub fn gateway_credentials_present(&self) -> bool {
        !self.razorpay_key_id.is_empty() && !self.razorpay_key_secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let cfg = from_map(&[]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.gateway_mode, GatewayMode::Razorpay);
        assert_eq!(cfg.razorpay_key_id, "");
        assert_eq!(cfg.razorpay_key_secret, "");
        assert_eq!(cfg.gateway_timeout_ms, 2500);
        assert!(cfg.emailjs_service_id.is_none());
        assert!(!cfg.gateway_credentials_present());
    }

    #[test]
    fn blank_emailjs_keys_count_as_unset() {
        let cfg = from_map(&[("EMAILJS_SERVICE_ID", "  "), ("EMAILJS_TEMPLATE_ID", "tpl_1")]);
        assert!(cfg.emailjs_service_id.is_none());
        assert_eq!(cfg.emailjs_template_id.as_deref(), Some("tpl_1"));
    }

    #[test]
    fn mock_gateway_and_bad_timeout() {
        let cfg = from_map(&[("PAYMENT_GATEWAY", "mock"), ("GATEWAY_TIMEOUT_MS", "soon")]);
        assert_eq!(cfg.gateway_mode, GatewayMode::Mock);
        assert_eq!(cfg.gateway_timeout_ms, 2500);
    }

    #[test]
    fn debug_output_hides_secret() {
        let cfg = from_map(&[("RAZORPAY_KEY_SECRET", "s3cr3t"), ("RAZORPAY_KEY_ID", "rzp_test")]);
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("s3cr3t"));
        assert!(!rendered.contains("rzp_test"));
        assert!(cfg.gateway_credentials_present());
    }
}
