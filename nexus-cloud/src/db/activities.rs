//! Admin activity log (dashboard "recent activity")

use shared::models::Activity;
use shared::util::{now_millis, snowflake_id};
use sqlx::PgPool;

pub async fn log(pool: &PgPool, action: &str, detail: &str, actor: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO activities (id, action, detail, actor, timestamp) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(snowflake_id())
    .bind(action)
    .bind(detail)
    .bind(actor)
    .bind(now_millis())
    .execute(pool)
    .await?;
    Ok(())
}

/// Most recent entries, newest first
pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<Activity>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, action, detail, actor, timestamp FROM activities
         ORDER BY timestamp DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
