//! Unified service-layer error type for nexus-cloud
//!
//! `ServiceError` bridges DB-layer and storage errors (`sqlx::Error`,
//! `BoxError`, `StorageError`) to the API-layer error (`AppError`), so
//! handlers can use `?` without hand-written `map_err` logging.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::storage::StorageError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error
///
/// - `Db`: Database/infrastructure errors (auto-logged, mapped to InternalError)
/// - `Storage`: Object storage errors (auto-logged, mapped to FileStorageFailed)
/// - `App`: Business-rule errors (transparent pass-through to client)
#[derive(Debug)]
pub enum ServiceError {
    /// Database or infrastructure error (sqlx, serde, etc.)
    Db(BoxError),
    /// Object storage failure
    Storage(StorageError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<StorageError> for ServiceError {
    fn from(e: StorageError) -> Self {
        ServiceError::Storage(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
            ServiceError::Storage(storage_err) => {
                tracing::error!(error = %storage_err, "Object storage error");
                AppError::new(ErrorCode::FileStorageFailed)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn app_errors_pass_through() {
        let err: AppError = ServiceError::from(AppError::new(ErrorCode::EventNotFound)).into();
        assert_eq!(err.code, ErrorCode::EventNotFound);
    }

    #[test]
    fn db_errors_become_opaque() {
        let boxed: BoxError = "connection reset: secret-host:5432".into();
        let err: AppError = ServiceError::from(boxed).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("secret-host"));
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn row_not_found_is_still_internal() {
        let err: AppError = ServiceError::from(sqlx::Error::RowNotFound).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn storage_errors_map_to_storage_code() {
        let err: AppError =
            ServiceError::from(StorageError::Upload("bucket missing".into())).into();
        assert_eq!(err.code, ErrorCode::FileStorageFailed);
    }
}
