//! Admin JWT sessions for the back-office API

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::AdminProfile;

use crate::state::AppState;

/// JWT claims for admin sessions
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin email (allow-list key)
    pub sub: String,
    /// Display name at login time
    pub name: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Signed-in admin, injected into request extensions for protected routes
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub email: String,
    pub name: String,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a session token for an admin
pub fn create_token(
    admin: &AdminProfile,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = AdminClaims {
        sub: admin.email.clone(),
        name: admin.display_name(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a session token and return its claims
pub fn verify_token(
    token: &str,
    secret: &str,
) -> Result<AdminClaims, jsonwebtoken::errors::Error> {
    let data = jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Map a token failure onto the session error codes
pub fn token_error(e: &jsonwebtoken::errors::Error) -> AppError {
    match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::token_expired(),
        _ => AppError::new(ErrorCode::TokenInvalid),
    }
}

/// Middleware that verifies the admin bearer token on protected routes
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::not_authenticated)?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::with_message(ErrorCode::NotAuthenticated, "Invalid Authorization format")
    })?;

    let claims = verify_token(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("Admin JWT validation failed: {e}");
        token_error(&e)
    })?;

    request.extensions_mut().insert(AdminIdentity {
        email: claims.sub,
        name: claims.name,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminProfile {
        AdminProfile {
            email: "ops@nexus.io".into(),
            first_name: "Ola".into(),
            last_name: "Nordmann".into(),
        }
    }

    #[test]
    fn token_roundtrip() {
        let token = create_token(&admin(), "s3cret").unwrap();
        let claims = verify_token(&token, "s3cret").unwrap();
        assert_eq!(claims.sub, "ops@nexus.io");
        assert_eq!(claims.name, "Ola Nordmann");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let token = create_token(&admin(), "s3cret").unwrap();
        let err = verify_token(&token, "other").unwrap_err();
        assert_eq!(token_error(&err).code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let past = chrono::Utc::now() - chrono::Duration::hours(2);
        let claims = AdminClaims {
            sub: "ops@nexus.io".into(),
            name: "Ola".into(),
            exp: past.timestamp() as usize,
            iat: (past - chrono::Duration::hours(1)).timestamp() as usize,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .unwrap();
        let err = verify_token(&token, "s3cret").unwrap_err();
        assert_eq!(token_error(&err).code, ErrorCode::TokenExpired);
    }
}
