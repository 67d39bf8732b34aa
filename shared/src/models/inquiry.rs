//! Inquiry Model (contact form submissions)

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::AppError;

/// How long the contact form stays in its "sent" state before resetting
pub const CONTACT_RESET_DELAY_MS: u64 = 3000;

/// Inquiry lifecycle status
///
/// A fresh submission carries no status at all; admins move it along.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    New,
    Pending,
    Resolved,
    Responded,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Responded => "responded",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "pending" => Some(Self::Pending),
            "resolved" => Some(Self::Resolved),
            "responded" => Some(Self::Responded),
            _ => None,
        }
    }
}

/// Inquiry entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub country: String,
    pub job_title: String,
    pub job_details: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InquiryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Contact form payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub country: String,
    pub job_title: String,
    pub job_details: String,
}

impl InquiryCreate {
    /// Every contact form field is required
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("phone", &self.phone)?;
        require("company", &self.company)?;
        require("country", &self.country)?;
        require("job_title", &self.job_title)?;
        require("job_details", &self.job_details)?;
        Ok(())
    }

    /// Build the stored record: stamped, trimmed, and without a status
    pub fn into_inquiry(self, id: i64, now: i64) -> Inquiry {
        Inquiry {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company: self.company.trim().to_string(),
            country: self.country.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            job_details: self.job_details.trim().to_string(),
            timestamp: now,
            status: None,
            response: None,
            responded_at: None,
            updated_at: None,
        }
    }
}

/// Contact form acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    pub id: i64,
    pub message: String,
    /// Delay before the form returns to its blank state
    pub reset_after_ms: u64,
}

/// Admin status change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryStatusUpdate {
    pub status: InquiryStatus,
}

/// Admin response to an enquiry (queued as an outgoing email)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondRequest {
    pub response: String,
}

impl RespondRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require("response", &self.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn form() -> InquiryCreate {
        InquiryCreate {
            name: " Ada Lovelace ".into(),
            email: "ada@example.com".into(),
            phone: "+44 20 0000".into(),
            company: "Analytical Engines".into(),
            country: "UK".into(),
            job_title: "CTO".into(),
            job_details: "Need a software audit".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn each_missing_field_is_reported() {
        let mut f = form();
        f.job_title = "".into();
        let err = f.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "job_title");

        let mut f = form();
        f.country = "  ".into();
        assert!(f.validate().is_err());
    }

    #[test]
    fn submission_has_timestamp_and_no_status() {
        let inquiry = form().into_inquiry(7, 1_700_000_000_000);
        assert_eq!(inquiry.id, 7);
        assert_eq!(inquiry.timestamp, 1_700_000_000_000);
        assert_eq!(inquiry.name, "Ada Lovelace");
        assert!(inquiry.status.is_none());

        let json = serde_json::to_value(&inquiry).unwrap();
        assert!(json.get("status").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn status_db_roundtrip() {
        for s in [
            InquiryStatus::New,
            InquiryStatus::Pending,
            InquiryStatus::Resolved,
            InquiryStatus::Responded,
        ] {
            assert_eq!(InquiryStatus::from_db(s.as_str()), Some(s));
        }
        assert_eq!(InquiryStatus::from_db("archived"), None);
    }
}
