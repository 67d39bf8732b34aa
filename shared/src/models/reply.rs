//! Reply Model

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::AppError;

/// Admin reply to an inquiry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reply {
    pub id: i64,
    pub inquiry_id: i64,
    pub reply: String,
    pub to_address: String,
    pub company_name: String,
    pub timestamp: i64,
}

/// Create reply payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyCreate {
    pub reply: String,
}

impl ReplyCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        require("reply", &self.reply)
    }
}
