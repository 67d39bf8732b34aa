//! Shared types for the NEXUS back-office
//!
//! Record types for every collection, the error system, and the pure
//! transforms (aggregation, filtering, membership, rating summaries) that
//! the admin screens apply to collection snapshots.

pub mod analytics;
pub mod assistant;
pub mod auth;
pub mod error;
pub mod filter;
pub mod membership;
pub mod models;
pub mod rating;
pub mod upload;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
