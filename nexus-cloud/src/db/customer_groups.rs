//! customer_groups table
//!
//! Membership writes are compare-and-swap on `version`: read the current
//! list, apply the change, write back only if nobody else wrote in between.

use shared::membership::MembershipChange;
use shared::models::CustomerGroup;
use sqlx::PgPool;

const MAX_MEMBERSHIP_ATTEMPTS: usize = 3;

const COLUMNS: &str = "id, name, customers, version, created_at, updated_at";

/// Result of a membership write
#[derive(Debug)]
pub enum MembershipUpdate {
    Updated(CustomerGroup),
    NotFound,
    /// Lost the version race on every attempt
    Conflict,
}

pub async fn list(pool: &PgPool) -> Result<Vec<CustomerGroup>, sqlx::Error> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM customer_groups ORDER BY created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<CustomerGroup>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM customer_groups WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, group: &CustomerGroup) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO customer_groups (id, name, customers, version, created_at)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(group.id)
    .bind(&group.name)
    .bind(&group.customers)
    .bind(group.version)
    .bind(group.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn rename(
    pool: &PgPool,
    id: i64,
    name: &str,
    now: i64,
) -> Result<Option<CustomerGroup>, sqlx::Error> {
    sqlx::query_as(&format!(
        "UPDATE customer_groups SET name = $1, updated_at = $2 WHERE id = $3 RETURNING {COLUMNS}"
    ))
    .bind(name)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM customer_groups WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Apply a membership change with optimistic concurrency
pub async fn update_members(
    pool: &PgPool,
    id: i64,
    change: MembershipChange,
    now: i64,
) -> Result<MembershipUpdate, sqlx::Error> {
    for attempt in 1..=MAX_MEMBERSHIP_ATTEMPTS {
        let Some(current) = find_by_id(pool, id).await? else {
            return Ok(MembershipUpdate::NotFound);
        };

        let customers = change.apply(&current.customers);

        let updated: Option<CustomerGroup> = sqlx::query_as(&format!(
            "UPDATE customer_groups
             SET customers = $1, version = version + 1, updated_at = $2
             WHERE id = $3 AND version = $4
             RETURNING {COLUMNS}"
        ))
        .bind(&customers)
        .bind(now)
        .bind(id)
        .bind(current.version)
        .fetch_optional(pool)
        .await?;

        if let Some(group) = updated {
            return Ok(MembershipUpdate::Updated(group));
        }
        tracing::debug!(group_id = id, attempt, "Customer group version moved, retrying");
    }

    tracing::warn!(group_id = id, "Customer group membership update kept conflicting");
    Ok(MembershipUpdate::Conflict)
}
