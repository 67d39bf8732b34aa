//! Daily visitor counters, one row per UTC day

use shared::models::VisitorDay;
use sqlx::PgPool;

pub async fn record_visit(pool: &PgPool, day: &str, now: i64) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "INSERT INTO visitors (day, count, timestamp) VALUES ($1, 1, $2)
         ON CONFLICT (day) DO UPDATE SET count = visitors.count + 1, timestamp = EXCLUDED.timestamp
         RETURNING count",
    )
    .bind(day)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Most recent days, newest first
pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<VisitorDay>, sqlx::Error> {
    sqlx::query_as("SELECT day, count, timestamp FROM visitors ORDER BY timestamp DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}
