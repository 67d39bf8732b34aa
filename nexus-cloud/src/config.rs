//! Back-office server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Back-office server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// JWT secret for admin sessions
    pub jwt_secret: String,
    /// S3 bucket for gallery images
    pub s3_bucket: String,
    /// Public base URL the bucket is served from (CDN or S3 website)
    pub storage_public_base_url: String,
    /// Sender name stamped on queued response emails
    pub email_sender_name: String,
    /// Origin allowed by CORS (the marketing site); `None` allows any
    pub cors_allowed_origin: Option<String>,
    /// Admin seeded into the allow-list at startup (email, password)
    pub bootstrap_admin: Option<(String, String)>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let s3_bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| "nexus-site-assets".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: environment.clone(),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            storage_public_base_url: std::env::var("STORAGE_PUBLIC_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("https://{s3_bucket}.s3.amazonaws.com")),
            s3_bucket,
            email_sender_name: std::env::var("EMAIL_SENDER_NAME")
                .unwrap_or_else(|_| "NEXUS Team".into()),
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|s| !s.is_empty()),
            bootstrap_admin: match (
                std::env::var("ADMIN_BOOTSTRAP_EMAIL"),
                std::env::var("ADMIN_BOOTSTRAP_PASSWORD"),
            ) {
                (Ok(email), Ok(password)) if !email.is_empty() && !password.is_empty() => {
                    Some((email.trim().to_lowercase(), password))
                }
                _ => None,
            },
        })
    }
}
