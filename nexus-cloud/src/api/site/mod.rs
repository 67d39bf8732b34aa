//! Public marketing-site endpoints (no auth)

pub mod assistant;
pub mod contact;
pub mod solutions;
pub mod visits;
