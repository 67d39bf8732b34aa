//! Admin sign-in failure taxonomy
//!
//! Credential failures arrive as short provider codes; the console shows a
//! fixed message for the known ones and the raw message for anything else.

use crate::error::{AppError, ErrorCode};

/// Why a sign-in attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// Email passed the allow-list but has no credentials
    UserNotFound,
    WrongPassword,
    InvalidEmail,
    TooManyRequests,
    /// Email is not on the admin allow-list
    AccessDenied,
    /// Unrecognized failure, carrying the raw message
    Other(String),
}

impl AuthFailure {
    /// Map a provider error code (with or without the `auth/` prefix)
    pub fn from_code(code: &str, raw_message: &str) -> Self {
        match code.strip_prefix("auth/").unwrap_or(code) {
            "user-not-found" => Self::UserNotFound,
            "wrong-password" | "invalid-credential" => Self::WrongPassword,
            "invalid-email" => Self::InvalidEmail,
            "too-many-requests" => Self::TooManyRequests,
            _ => Self::Other(raw_message.to_string()),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UserNotFound => ErrorCode::UserNotFound,
            Self::WrongPassword => ErrorCode::InvalidCredentials,
            Self::InvalidEmail => ErrorCode::InvalidEmail,
            Self::TooManyRequests => ErrorCode::TooManyAttempts,
            Self::AccessDenied => ErrorCode::AdminRequired,
            Self::Other(_) => ErrorCode::AuthProviderError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Other(raw) if !raw.trim().is_empty() => raw.clone(),
            other => other.error_code().message().to_string(),
        }
    }
}

impl From<AuthFailure> for AppError {
    fn from(failure: AuthFailure) -> Self {
        AppError::with_message(failure.error_code(), failure.message())
    }
}

/// Cheap shape check before touching the allow-list
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn known_codes_map_to_fixed_messages() {
        assert_eq!(
            AuthFailure::from_code("auth/user-not-found", "x").message(),
            "No admin account found with this email."
        );
        assert_eq!(
            AuthFailure::from_code("wrong-password", "x").message(),
            "Invalid admin credentials."
        );
        assert_eq!(
            AuthFailure::from_code("auth/invalid-email", "x").message(),
            "Invalid email address."
        );
        assert_eq!(
            AuthFailure::from_code("auth/too-many-requests", "x").message(),
            "Too many failed attempts. Please try again later."
        );
    }

    #[test]
    fn unknown_code_keeps_raw_message() {
        let failure = AuthFailure::from_code("auth/network-request-failed", "Network down");
        assert_eq!(failure, AuthFailure::Other("Network down".into()));
        assert_eq!(failure.message(), "Network down");

        let blank = AuthFailure::Other(String::new());
        assert_eq!(blank.message(), "An error occurred during login.");
    }

    #[test]
    fn access_denied_is_forbidden() {
        let err: AppError = AuthFailure::AccessDenied.into();
        assert_eq!(err.code, ErrorCode::AdminRequired);
        assert_eq!(err.message, "Access denied. Admin credentials required.");
        assert_eq!(err.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn too_many_requests_is_429() {
        let err: AppError = AuthFailure::TooManyRequests.into();
        assert_eq!(err.http_status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("admin@nexus.io"));
        assert!(!is_plausible_email("admin"));
        assert!(!is_plausible_email("@nexus.io"));
        assert!(!is_plausible_email("admin@localhost"));
        assert!(!is_plausible_email("admin@nexus."));
    }
}
