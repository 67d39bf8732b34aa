//! Database access layer
//!
//! One module per collection table. Functions take the pool (or an open
//! transaction) and return raw `sqlx::Error`/`BoxError`; handlers decide
//! how failures surface.

pub mod activities;
pub mod admins;
pub mod articles;
pub mod customer_groups;
pub mod events;
pub mod gallery;
pub mod inquiries;
pub mod replies;
pub mod visitors;
