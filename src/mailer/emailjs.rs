use crate::config::AppConfig;
use crate::domain::booking::BookingEmail;
use crate::mailer::BookingMailer;
use anyhow::{anyhow, Result};
use serde_json::json;

pub struct EmailJsMailer {
    pub base_url: String,
    pub public_key: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl EmailJsMailer {
    pub fn from_config(cfg: &AppConfig, client: reqwest::Client) -> Self {
        Self {
            base_url: cfg.emailjs_base_url.clone(),
            public_key: cfg.emailjs_public_key.clone(),
            service_id: cfg.emailjs_service_id.clone(),
            template_id: cfg.emailjs_template_id.clone(),
            timeout_ms: cfg.email_timeout_ms,
            client,
        }
    }
}

#[async_trait::async_trait]
impl BookingMailer for EmailJsMailer {
    fn missing_keys(&self) -> Vec<String> {
        [
            ("EMAILJS_PUBLIC_KEY", &self.public_key),
            ("EMAILJS_SERVICE_ID", &self.service_id),
            ("EMAILJS_TEMPLATE_ID", &self.template_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key.to_string())
        .collect()
    }

    async fn send(&self, email: &BookingEmail) -> Result<()> {
        let (Some(public_key), Some(service_id), Some(template_id)) =
            (&self.public_key, &self.service_id, &self.template_id)
        else {
            return Err(anyhow!("emailjs is not configured"));
        };

        let url = format!("{}/api/v1.0/email/send", self.base_url.trim_end_matches('/'));
        let body = json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": public_key,
            "template_params": email,
        });

        let resp = self
            .client
            .post(url)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!(
                "emailjs returned HTTP {}: {}",
                status.as_u16(),
                text.chars().take(200).collect::<String>()
            ));
        }

        Ok(())
    }
}
