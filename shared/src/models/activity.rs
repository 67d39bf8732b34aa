//! Activity and visitor Models (dashboard feeds)

use serde::{Deserialize, Serialize};

/// Admin action trail entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Activity {
    pub id: i64,
    /// Action kind, e.g. `article_created`
    pub action: String,
    /// Short human-readable description
    pub detail: String,
    /// Email of the admin who acted
    pub actor: String,
    pub timestamp: i64,
}

/// Visitor counter for one UTC day
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct VisitorDay {
    /// `YYYY-MM-DD`
    pub day: String,
    pub count: i64,
    /// Last time the counter moved
    pub timestamp: i64,
}
