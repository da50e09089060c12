use crate::domain::booking::BookingEmail;
use crate::mailer::BookingMailer;
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

/// Records e-mails instead of sending them.
#[derive(Clone, Default)]
pub struct MockMailer {
    pub fail: bool,
    pub missing: Vec<String>,
    sent: Arc<Mutex<Vec<BookingEmail>>>,
}

impl MockMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn unconfigured(missing: &[&str]) -> Self {
        Self {
            missing: missing.iter().map(|k| k.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<BookingEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl BookingMailer for MockMailer {
    fn missing_keys(&self) -> Vec<String> {
        self.missing.clone()
    }

    async fn send(&self, email: &BookingEmail) -> Result<()> {
        if self.fail {
            return Err(anyhow!("mock mailer failure"));
        }
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }
        Ok(())
    }
}
