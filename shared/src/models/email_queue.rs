//! Email Queue Model
//!
//! Entries are produced here and consumed by an external mailer.

use serde::{Deserialize, Serialize};

/// Status of a freshly queued email
pub const EMAIL_STATUS_PENDING: &str = "pending";

/// Queued outgoing email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmailQueueEntry {
    pub id: i64,
    pub to_address: String,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub status: String,
    pub enquiry_id: i64,
    pub sender_name: String,
    pub created_at: i64,
}

impl EmailQueueEntry {
    /// Email carrying an admin's response back to the enquirer
    pub fn for_enquiry_response(
        id: i64,
        inquiry: &super::Inquiry,
        response: &str,
        sender_name: &str,
        now: i64,
    ) -> Self {
        Self {
            id,
            to_address: inquiry.email.clone(),
            subject: format!("Response to your enquiry - {}", inquiry.company),
            html: response.to_string(),
            text: response.to_string(),
            status: EMAIL_STATUS_PENDING.to_string(),
            enquiry_id: inquiry.id,
            sender_name: sender_name.to_string(),
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InquiryCreate;

    #[test]
    fn response_email_shape() {
        let inquiry = InquiryCreate {
            name: "Grace".into(),
            email: "grace@navy.mil".into(),
            phone: "1".into(),
            company: "COBOL Inc".into(),
            country: "US".into(),
            job_title: "Admiral".into(),
            job_details: "compilers".into(),
        }
        .into_inquiry(42, 1);

        let entry =
            EmailQueueEntry::for_enquiry_response(9, &inquiry, "Thanks, we'll call.", "NEXUS Team", 5);
        assert_eq!(entry.to_address, "grace@navy.mil");
        assert_eq!(entry.subject, "Response to your enquiry - COBOL Inc");
        assert_eq!(entry.html, entry.text);
        assert_eq!(entry.status, EMAIL_STATUS_PENDING);
        assert_eq!(entry.enquiry_id, 42);
        assert_eq!(entry.sender_name, "NEXUS Team");
        assert_eq!(entry.created_at, 5);
    }
}
