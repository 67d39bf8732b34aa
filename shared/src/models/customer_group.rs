//! Customer Group Model

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::AppError;

/// Customer group entity
///
/// `customers` holds inquiry ids with set semantics; entries may refer to
/// inquiries that have since been deleted. `version` guards concurrent
/// membership edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomerGroup {
    pub id: i64,
    pub name: String,
    pub customers: Vec<i64>,
    pub version: i64,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// Create customer group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerGroupCreate {
    pub name: String,
    #[serde(default)]
    pub customers: Vec<i64>,
}

impl CustomerGroupCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)
    }
}

/// Rename customer group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerGroupUpdate {
    pub name: String,
}

impl CustomerGroupUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        require("name", &self.name)
    }
}

/// A customer as listed on the group screen (projected from an inquiry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub country: String,
}

impl From<&super::Inquiry> for CustomerSummary {
    fn from(inquiry: &super::Inquiry) -> Self {
        Self {
            id: inquiry.id,
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            company: inquiry.company.clone(),
            country: inquiry.country.clone(),
        }
    }
}
