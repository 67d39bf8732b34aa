//! nexus-cloud: NEXUS marketing site API and admin back-office
//!
//! Long-running service that:
//! - Accepts contact form submissions, solution ratings and visit pings
//! - Serves the solutions showcase and the website assistant
//! - Provides the JWT-authenticated admin API (inquiries, groups, content)
//! - Pushes live enquiry snapshots to connected admins over WebSocket

mod api;
mod auth;
mod config;
mod db;
mod error;
mod live;
mod state;
mod storage;
mod util;

use std::net::SocketAddr;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_cloud=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting nexus-cloud (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    if let Some((email, password)) = &config.bootstrap_admin {
        seed_admin(&state, email, password).await?;
    }

    let app = api::create_router(state.clone(), config.cors_allowed_origin.as_deref());

    // Periodic rate limiter cleanup (every 5 minutes)
    let rate_limiter = state.rate_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            rate_limiter.cleanup().await;
        }
    });

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("nexus-cloud HTTP listening on {http_addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Put the configured admin on the allow-list with a fresh password hash
async fn seed_admin(state: &AppState, email: &str, password: &str) -> Result<(), BoxError> {
    let hash = util::hash_password(password).map_err(|e| format!("Password hash failed: {e}"))?;
    db::admins::upsert(&state.pool, email, "Admin", "", &hash).await?;
    tracing::info!(email = %email, "Bootstrap admin ensured");
    Ok(())
}
