use crate::domain::booking::{BookingRequest, BookingResponse, EmailServiceStatus};
use crate::domain::error::ApiError;
use crate::mailer::BookingMailer;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingService {
    pub mailer: Arc<dyn BookingMailer>,
    pub recipient_name: String,
}

impl BookingService {
    pub async fn submit(&self, req: BookingRequest) -> Result<BookingResponse, ApiError> {
        let meeting_time = req.validate().map_err(ApiError::InvalidBooking)?;

        if !self.mailer.is_configured() {
            tracing::warn!(missing = ?self.mailer.missing_keys(), "booking email not configured");
            return Err(ApiError::EmailNotConfigured);
        }

        let email = req.into_email(&self.recipient_name, meeting_time);
        if let Err(e) = self.mailer.send(&email).await {
            tracing::error!(error = %e, "error sending booking email");
            return Err(ApiError::EmailSend);
        }

        tracing::info!(
            meeting_date = %email.meeting_date,
            meeting_time = %email.meeting_time,
            timezone = %email.timezone,
            "booking email sent"
        );
        Ok(BookingResponse {
            success: true,
            message: "Booking request sent".to_string(),
        })
    }

    pub fn status(&self) -> EmailServiceStatus {
        let missing_keys = self.mailer.missing_keys();
        EmailServiceStatus {
            is_configured: missing_keys.is_empty(),
            missing_keys,
        }
    }
}
