//! Admin authentication: sessions, sign-in and request throttling

pub mod admin_auth;
pub mod login;
pub mod rate_limit;

pub use admin_auth::AdminIdentity;
