//! Admin sign-in and session echo

use axum::{Extension, Json, extract::State};
use shared::models::{LoginRequest, LoginResponse};

use crate::auth::AdminIdentity;
use crate::auth::admin_auth::create_token;
use crate::auth::login::{PgAdminStore, authenticate};
use crate::state::AppState;

use super::super::{ApiResult, internal};
use super::record_activity;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let store = PgAdminStore { pool: &state.pool };
    let admin = authenticate(&store, &store, &req.email, &req.password).await?;

    let token = create_token(&admin, &state.jwt_secret).map_err(internal)?;

    tracing::info!(email = %admin.email, "Admin signed in");
    record_activity(&state, "login", "Signed in to admin panel", &admin.email).await;

    Ok(Json(LoginResponse { token, admin }))
}

#[derive(serde::Serialize)]
pub struct Me {
    pub email: String,
    pub name: String,
}

/// GET /api/admin/me
pub async fn me(Extension(identity): Extension<AdminIdentity>) -> ApiResult<Me> {
    Ok(Json(Me {
        email: identity.email,
        name: identity.name,
    }))
}
