//! Application state for nexus-cloud

use aws_sdk_s3::Client as S3Client;
use dashmap::DashMap;
use sqlx::PgPool;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use crate::auth::rate_limit::RateLimiter;
use crate::config::Config;
use crate::live::InquiryFeed;
use crate::storage::ObjectStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Image storage (gallery uploads)
    pub storage: ObjectStore,
    /// JWT secret for admin sessions
    pub jwt_secret: String,
    /// Sender name for queued response emails
    pub email_sender_name: String,
    /// Rate limiter for login and public form routes
    pub rate_limiter: RateLimiter,
    /// Live inquiry change hub
    pub inquiry_feed: InquiryFeed,
    /// Open enquiry WS sessions per admin email
    pub feed_connections: Arc<DashMap<String, AtomicUsize>>,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let s3 = S3Client::new(&aws_config);

        Ok(Self::from_parts(pool, s3, config))
    }

    /// Assemble state from already-built clients
    pub fn from_parts(pool: PgPool, s3: S3Client, config: &Config) -> Self {
        Self {
            pool,
            storage: ObjectStore::new(
                s3,
                config.s3_bucket.clone(),
                config.storage_public_base_url.clone(),
            ),
            jwt_secret: config.jwt_secret.clone(),
            email_sender_name: config.email_sender_name.clone(),
            rate_limiter: RateLimiter::new(),
            inquiry_feed: InquiryFeed::new(),
            feed_connections: Arc::new(DashMap::new()),
        }
    }
}
