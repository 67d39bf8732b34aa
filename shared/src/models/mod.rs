//! Data models
//!
//! One record type per collection, plus the create/update payloads that
//! are validated at the write boundary before anything reaches storage.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes, all timestamps Unix milliseconds.

pub mod activity;
pub mod admin;
pub mod article;
pub mod customer_group;
pub mod email_queue;
pub mod event;
pub mod gallery;
pub mod inquiry;
pub mod reply;

// Re-exports
pub use activity::*;
pub use admin::*;
pub use article::*;
pub use customer_group::*;
pub use email_queue::*;
pub use event::*;
pub use gallery::*;
pub use inquiry::*;
pub use reply::*;

use crate::error::AppError;

/// Reject a blank required field
pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    Ok(())
}

/// Split a comma-separated form value into trimmed, non-empty entries
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn require_rejects_whitespace() {
        let err = require("title", "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert!(require("title", "Launch").is_ok());
    }

    #[test]
    fn split_comma_list_trims_and_drops_empties() {
        assert_eq!(
            split_comma_list(" ai, cloud ,, security ,"),
            vec!["ai", "cloud", "security"]
        );
        assert!(split_comma_list("").is_empty());
        assert!(split_comma_list(" , ").is_empty());
    }
}
