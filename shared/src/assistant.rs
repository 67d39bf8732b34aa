//! Keyword-driven website assistant
//!
//! No model behind it: the first matching keyword group picks a canned
//! reply. Matching is case-insensitive substring, checked in order.

use serde::{Deserialize, Serialize};

const RULES: &[(&[&str], &str)] = &[
    (&["hello", "hi"], "Hello! How can I help you today?"),
    (
        &["help"],
        "I can help answer questions about our products, services, or provide general assistance. What would you like to know?",
    ),
    (
        &["product", "service"],
        "We offer a range of innovative solutions designed to help businesses grow. Our main products include AI-powered analytics, custom software development, and digital transformation consulting.",
    ),
    (
        &["price", "cost"],
        "Our pricing varies based on your specific needs. We offer flexible plans starting from $99/month for basic services. Would you like to discuss a custom quote?",
    ),
    (
        &["contact", "support"],
        "You can reach our support team at support@example.com or call us at (555) 123-4567 during business hours.",
    ),
    (
        &["thank"],
        "You're welcome! Is there anything else I can help you with?",
    ),
    (
        &["bye", "goodbye"],
        "Thank you for chatting with me! Have a great day. Feel free to return if you have more questions.",
    ),
];

const FALLBACK: &str = "I appreciate your message. For more specific information or assistance, could you please provide more details about what you're looking for?";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub reply: String,
    pub timestamp: i64,
}

/// Pick the canned reply for a visitor message; `None` for blank input
pub fn respond(message: &str) -> Option<&'static str> {
    let lowered = message.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    let reply = RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK);
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting() {
        assert_eq!(respond("Hello there"), Some("Hello! How can I help you today?"));
    }

    #[test]
    fn first_matching_group_wins() {
        // "help" would match too, but the greeting group is checked first
        assert_eq!(respond("HI, I need help"), Some("Hello! How can I help you today?"));
        assert!(respond("what does it cost?").unwrap().starts_with("Our pricing"));
        assert!(respond("need support").unwrap().starts_with("You can reach"));
    }

    #[test]
    fn fallback_and_blank() {
        assert_eq!(respond("quarterly roadmap?"), Some(FALLBACK));
        assert_eq!(respond("   "), None);
    }
}
