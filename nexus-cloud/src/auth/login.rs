//! Admin sign-in: allow-list first, credentials second
//!
//! The allow-list and the credential check sit behind separate traits so
//! the order of the two steps is pinned down independently of storage.

use async_trait::async_trait;
use shared::auth::{AuthFailure, is_plausible_email};
use shared::models::AdminProfile;
use sqlx::PgPool;

use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::util::verify_password;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Lookup of emails allowed into the back-office
#[async_trait]
pub trait AdminAllowList: Send + Sync {
    async fn find_admin(&self, email: &str) -> Result<Option<AdminProfile>, BoxError>;
}

/// Email/password verification for allow-listed admins
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<(), CredentialError>;
}

/// Outcome of a failed credential check
#[derive(Debug)]
pub enum CredentialError {
    Rejected(AuthFailure),
    Backend(BoxError),
}

/// Sign in an admin.
///
/// An email missing from the allow-list is refused with `AccessDenied`
/// before the credential verifier is consulted at all.
pub async fn authenticate(
    allow_list: &dyn AdminAllowList,
    verifier: &dyn CredentialVerifier,
    email: &str,
    password: &str,
) -> ServiceResult<AdminProfile> {
    let email = email.trim().to_lowercase();
    if !is_plausible_email(&email) {
        return Err(rejected(AuthFailure::InvalidEmail));
    }

    let Some(admin) = allow_list.find_admin(&email).await? else {
        tracing::warn!(email = %email, "Login refused: not on admin allow-list");
        return Err(rejected(AuthFailure::AccessDenied));
    };

    match verifier.verify(&email, password).await {
        Ok(()) => Ok(admin),
        Err(CredentialError::Rejected(failure)) => {
            tracing::info!(email = %email, failure = ?failure, "Admin credentials rejected");
            Err(rejected(failure))
        }
        Err(CredentialError::Backend(e)) => Err(ServiceError::Db(e)),
    }
}

fn rejected(failure: AuthFailure) -> ServiceError {
    ServiceError::App(failure.into())
}

/// Allow-list and credentials both backed by the `admins` table
pub struct PgAdminStore<'a> {
    pub pool: &'a PgPool,
}

#[async_trait]
impl AdminAllowList for PgAdminStore<'_> {
    async fn find_admin(&self, email: &str) -> Result<Option<AdminProfile>, BoxError> {
        Ok(db::admins::find_profile(self.pool, email).await?)
    }
}

#[async_trait]
impl CredentialVerifier for PgAdminStore<'_> {
    async fn verify(&self, email: &str, password: &str) -> Result<(), CredentialError> {
        let hash = db::admins::find_password_hash(self.pool, email)
            .await
            .map_err(|e| CredentialError::Backend(e.into()))?;

        match hash {
            None => Err(CredentialError::Rejected(AuthFailure::UserNotFound)),
            Some(hash) if verify_password(password, &hash) => Ok(()),
            Some(_) => Err(CredentialError::Rejected(AuthFailure::WrongPassword)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::{AppError, ErrorCode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeAllowList(Vec<&'static str>);

    #[async_trait]
    impl AdminAllowList for FakeAllowList {
        async fn find_admin(&self, email: &str) -> Result<Option<AdminProfile>, BoxError> {
            Ok(self.0.iter().any(|e| *e == email).then(|| AdminProfile {
                email: email.to_string(),
                first_name: "Test".into(),
                last_name: "Admin".into(),
            }))
        }
    }

    /// Counts calls and accepts exactly one password
    struct CountingVerifier {
        calls: AtomicUsize,
        password: &'static str,
    }

    impl CountingVerifier {
        fn new(password: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                password,
            }
        }
    }

    #[async_trait]
    impl CredentialVerifier for CountingVerifier {
        async fn verify(&self, _email: &str, password: &str) -> Result<(), CredentialError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if password == self.password {
                Ok(())
            } else {
                Err(CredentialError::Rejected(AuthFailure::WrongPassword))
            }
        }
    }

    fn app_error(e: ServiceError) -> AppError {
        e.into()
    }

    #[tokio::test]
    async fn non_admin_rejected_before_password_check() {
        let allow = FakeAllowList(vec!["boss@nexus.io"]);
        let verifier = CountingVerifier::new("right");

        for password in ["right", "wrong", ""] {
            let err = authenticate(&allow, &verifier, "intruder@nexus.io", password)
                .await
                .unwrap_err();
            let err = app_error(err);
            assert_eq!(err.code, ErrorCode::AdminRequired);
            assert_eq!(err.message, "Access denied. Admin credentials required.");
        }
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn admin_with_right_password_signs_in() {
        let allow = FakeAllowList(vec!["boss@nexus.io"]);
        let verifier = CountingVerifier::new("right");

        let admin = authenticate(&allow, &verifier, "  Boss@Nexus.io ", "right")
            .await
            .unwrap();
        assert_eq!(admin.email, "boss@nexus.io");
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn admin_with_wrong_password_gets_credential_message() {
        let allow = FakeAllowList(vec!["boss@nexus.io"]);
        let verifier = CountingVerifier::new("right");

        let err = app_error(
            authenticate(&allow, &verifier, "boss@nexus.io", "nope")
                .await
                .unwrap_err(),
        );
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "Invalid admin credentials.");
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_up_front() {
        let allow = FakeAllowList(vec![]);
        let verifier = CountingVerifier::new("right");

        let err = app_error(
            authenticate(&allow, &verifier, "not-an-email", "right")
                .await
                .unwrap_err(),
        );
        assert_eq!(err.code, ErrorCode::InvalidEmail);
        assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
    }
}
