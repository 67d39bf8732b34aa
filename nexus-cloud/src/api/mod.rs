//! API routes for nexus-cloud
//!
//! Two surfaces share one router: the public marketing site (`site`) and
//! the JWT-protected back-office (`admin`).

pub mod admin;
pub mod health;
pub mod site;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Router, middleware};
use shared::error::{AppError, ErrorCode};
use shared::upload::MAX_UPLOAD_BYTES;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::admin_auth::admin_auth_middleware;
use crate::auth::rate_limit::{login_rate_limit, public_write_rate_limit};
use crate::state::AppState;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Log an infrastructure error and hide it behind a generic code
pub(crate) fn internal(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Internal error: {e}");
    AppError::new(ErrorCode::InternalError)
}

/// Create the combined router
pub fn create_router(state: AppState, cors_allowed_origin: Option<&str>) -> Router {
    // Public form writes (rate limited per IP)
    let public_writes = Router::new()
        .route("/api/contact", post(site::contact::submit))
        .route("/api/solutions/{id}/ratings", post(site::solutions::rate))
        .route("/api/visits", post(site::visits::record))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            public_write_rate_limit,
        ));

    let public = Router::new()
        .route("/api/solutions", get(site::solutions::list))
        .route("/api/solutions/{id}/ratings", get(site::solutions::ratings))
        .route("/api/assistant", post(site::assistant::ask));

    let login = Router::new()
        .route("/api/admin/login", post(admin::session::login))
        .layer(middleware::from_fn_with_state(state.clone(), login_rate_limit));

    // Browsers cannot set headers on a WebSocket handshake, so the live
    // feed authenticates from its query string instead of the middleware
    let live_feed = Router::new().route(
        "/api/admin/enquiries/ws",
        get(admin::enquiry_ws::handle_enquiry_ws),
    );

    // Room for the form fields next to a maximum-size image
    let protected = admin::router()
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(public_writes)
        .merge(public)
        .merge(login)
        .merge(live_feed)
        .merge(protected)
        .layer(cors_layer(cors_allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match allowed_origin.and_then(|o| o.parse::<http::HeaderValue>().ok()) {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}
