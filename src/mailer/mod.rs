use crate::domain::booking::BookingEmail;
use anyhow::Result;

pub mod emailjs;
pub mod mock;

#[async_trait::async_trait]
pub trait BookingMailer: Send + Sync {
    /// Names of the configuration keys that still need a value.
    fn missing_keys(&self) -> Vec<String>;

    fn is_configured(&self) -> bool {
        self.missing_keys().is_empty()
    }

    async fn send(&self, email: &BookingEmail) -> Result<()>;
}
