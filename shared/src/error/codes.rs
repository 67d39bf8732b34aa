//! Unified error codes for the NEXUS back-office
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Inquiry / customer group errors
//! - 4xxx: Content errors (articles, events, gallery)
//! - 5xxx: Upload errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the admin console can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Document was modified concurrently
    Conflict = 9,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// No account for this email
    UserNotFound = 1005,
    /// Malformed email address
    InvalidEmail = 1006,
    /// Too many failed attempts
    TooManyAttempts = 1007,
    /// Identity provider returned an unrecognized failure
    AuthProviderError = 1008,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Email is not on the admin allow-list
    AdminRequired = 2002,

    // ==================== 3xxx: Inquiry ====================
    /// Inquiry not found
    InquiryNotFound = 3001,
    /// Customer group not found
    CustomerGroupNotFound = 3101,

    // ==================== 4xxx: Content ====================
    /// Article not found
    ArticleNotFound = 4001,
    /// Event not found
    EventNotFound = 4101,
    /// Gallery item not found
    GalleryItemNotFound = 4201,
    /// Rating outside 1..=5
    InvalidRating = 4202,

    // ==================== 5xxx: Upload ====================
    /// File too large
    FileTooLarge = 5001,
    /// Unsupported file format
    UnsupportedFileFormat = 5002,
    /// No file provided in request
    NoFileProvided = 5003,
    /// Empty file provided
    EmptyFile = 5004,
    /// Object storage write/delete failed
    FileStorageFailed = 5005,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::Conflict => "Document was modified concurrently, please retry",

            // Auth
            ErrorCode::NotAuthenticated => "Admin login required",
            ErrorCode::InvalidCredentials => "Invalid admin credentials.",
            ErrorCode::TokenExpired => "Session has expired",
            ErrorCode::TokenInvalid => "Session token is invalid",
            ErrorCode::UserNotFound => "No admin account found with this email.",
            ErrorCode::InvalidEmail => "Invalid email address.",
            ErrorCode::TooManyAttempts => "Too many failed attempts. Please try again later.",
            ErrorCode::AuthProviderError => "An error occurred during login.",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Access denied. Admin credentials required.",

            // Inquiry
            ErrorCode::InquiryNotFound => "Inquiry not found",
            ErrorCode::CustomerGroupNotFound => "Customer group not found",

            // Content
            ErrorCode::ArticleNotFound => "Article not found",
            ErrorCode::EventNotFound => "Event not found",
            ErrorCode::GalleryItemNotFound => "Gallery item not found",
            ErrorCode::InvalidRating => "Rating must be between 1 and 5",

            // Upload
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::UnsupportedFileFormat => "Unsupported file format",
            ErrorCode::NoFileProvided => "No file provided",
            ErrorCode::EmptyFile => "Empty file provided",
            ErrorCode::FileStorageFailed => "File storage failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::Conflict),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::UserNotFound),
            1006 => Ok(ErrorCode::InvalidEmail),
            1007 => Ok(ErrorCode::TooManyAttempts),
            1008 => Ok(ErrorCode::AuthProviderError),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::AdminRequired),

            // Inquiry
            3001 => Ok(ErrorCode::InquiryNotFound),
            3101 => Ok(ErrorCode::CustomerGroupNotFound),

            // Content
            4001 => Ok(ErrorCode::ArticleNotFound),
            4101 => Ok(ErrorCode::EventNotFound),
            4201 => Ok(ErrorCode::GalleryItemNotFound),
            4202 => Ok(ErrorCode::InvalidRating),

            // Upload
            5001 => Ok(ErrorCode::FileTooLarge),
            5002 => Ok(ErrorCode::UnsupportedFileFormat),
            5003 => Ok(ErrorCode::NoFileProvided),
            5004 => Ok(ErrorCode::EmptyFile),
            5005 => Ok(ErrorCode::FileStorageFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::Conflict.code(), 9);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::AdminRequired.code(), 2002);
        assert_eq!(ErrorCode::InquiryNotFound.code(), 3001);
        assert_eq!(ErrorCode::GalleryItemNotFound.code(), 4201);
        assert_eq!(ErrorCode::FileStorageFailed.code(), 5005);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::Conflict,
            ErrorCode::NotAuthenticated,
            ErrorCode::InvalidCredentials,
            ErrorCode::TokenExpired,
            ErrorCode::TokenInvalid,
            ErrorCode::UserNotFound,
            ErrorCode::InvalidEmail,
            ErrorCode::TooManyAttempts,
            ErrorCode::AuthProviderError,
            ErrorCode::PermissionDenied,
            ErrorCode::AdminRequired,
            ErrorCode::InquiryNotFound,
            ErrorCode::CustomerGroupNotFound,
            ErrorCode::ArticleNotFound,
            ErrorCode::EventNotFound,
            ErrorCode::GalleryItemNotFound,
            ErrorCode::InvalidRating,
            ErrorCode::FileTooLarge,
            ErrorCode::UnsupportedFileFormat,
            ErrorCode::NoFileProvided,
            ErrorCode::EmptyFile,
            ErrorCode::FileStorageFailed,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::NetworkError,
            ErrorCode::TimeoutError,
            ErrorCode::ConfigError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(
            InvalidErrorCode(4242).to_string(),
            "invalid error code: 4242"
        );
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::AdminRequired).unwrap();
        assert_eq!(json, "2002");
        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::InquiryNotFound);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_login_messages_match_console_copy() {
        assert_eq!(
            ErrorCode::AdminRequired.message(),
            "Access denied. Admin credentials required."
        );
        assert_eq!(
            ErrorCode::UserNotFound.message(),
            "No admin account found with this email."
        );
        assert_eq!(
            ErrorCode::InvalidCredentials.message(),
            "Invalid admin credentials."
        );
    }
}
