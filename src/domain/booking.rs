use serde::{Deserialize, Serialize};

/// Consultation booking submitted from the site's booking form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub hour: String,
    #[serde(default)]
    pub minute: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timezone: String,
}

/// Template parameters sent to the e-mail provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingEmail {
    pub to_name: String,
    pub from_name: String,
    pub from_email: String,
    pub meeting_date: String,
    pub meeting_time: String,
    pub message: String,
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailServiceStatus {
    pub is_configured: bool,
    pub missing_keys: Vec<String>,
}

/// Leading integer of `s` after leading whitespace, ignoring any trailing
/// text (`"4 "` and `"4pm"` both give 4).
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Renders `hour:minute period`, or `None` if any part is out of range.
pub fn format_time(hour: &str, minute: &str, period: &str) -> Option<String> {
    let hour_num = leading_int(hour).filter(|h| (1..=12).contains(h))?;
    if minute != "00" && minute != "30" {
        return None;
    }
    if period != "AM" && period != "PM" {
        return None;
    }
    Some(format!("{}:{} {}", hour_num, minute, period))
}

fn is_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

fn is_host_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-')
}

/// `local@host.tld` with local in `[A-Za-z0-9._%+-]`, host in
/// `[A-Za-z0-9.-]` and a letters-only tld of at least two characters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && local.bytes().all(is_local_byte)
        && !host.is_empty()
        && host.bytes().all(is_host_byte)
        && tld.len() >= 2
        && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

impl BookingRequest {
    /// Checks the form fields in display order and returns the formatted
    /// meeting time on success.
    pub fn validate(&self) -> Result<String, String> {
        let name_len = self.name.chars().count();
        if name_len < 2 {
            return Err("Name must be at least 2 characters".to_string());
        }
        if name_len > 50 {
            return Err("Name is too long".to_string());
        }
        if !is_valid_email(&self.email) {
            return Err("Please enter a valid email address".to_string());
        }
        if self.date.is_empty() {
            return Err("Please select a date".to_string());
        }
        if self.hour.is_empty() {
            return Err("Please select an hour".to_string());
        }
        if !matches!(leading_int(&self.hour), Some(1..=12)) {
            return Err("Hour must be between 1 and 12".to_string());
        }
        if self.minute.is_empty() {
            return Err("Please select a minute".to_string());
        }
        if self.minute != "00" && self.minute != "30" {
            return Err("Minute must be 00 or 30".to_string());
        }
        if self.period.is_empty() {
            return Err("Please select AM or PM".to_string());
        }
        if self.period != "AM" && self.period != "PM" {
            return Err("Period must be AM or PM".to_string());
        }
        if self.timezone.is_empty() {
            return Err("Missing required field: timezone".to_string());
        }

        format_time(&self.hour, &self.minute, &self.period)
            .ok_or_else(|| "Invalid meeting time".to_string())
    }

    pub fn into_email(self, to_name: &str, meeting_time: String) -> BookingEmail {
        BookingEmail {
            to_name: to_name.to_string(),
            from_name: self.name,
            from_email: self.email,
            meeting_date: self.date,
            meeting_time,
            message: self
                .message
                .unwrap_or_else(|| "No additional message".to_string()),
            timezone: self.timezone,
        }
    }
}
