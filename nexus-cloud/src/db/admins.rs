use shared::models::AdminProfile;
use sqlx::PgPool;

pub async fn find_profile(pool: &PgPool, email: &str) -> Result<Option<AdminProfile>, sqlx::Error> {
    sqlx::query_as("SELECT email, first_name, last_name FROM admins WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// `None` when the admin has no credentials (or is not an admin at all)
pub async fn find_password_hash(pool: &PgPool, email: &str) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT hashed_password FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|(hash,)| hash))
}

/// Insert an admin, or reset the password of an existing one
pub async fn upsert(
    pool: &PgPool,
    email: &str,
    first_name: &str,
    last_name: &str,
    hashed_password: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO admins (email, first_name, last_name, hashed_password)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO UPDATE SET hashed_password = EXCLUDED.hashed_password",
    )
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .bind(hashed_password)
    .execute(pool)
    .await?;
    Ok(())
}
