use shared::models::Reply;
use sqlx::PgPool;

pub async fn create(pool: &PgPool, reply: &Reply) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO replies (id, inquiry_id, reply, to_address, company_name, timestamp)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(reply.id)
    .bind(reply.inquiry_id)
    .bind(&reply.reply)
    .bind(&reply.to_address)
    .bind(&reply.company_name)
    .bind(reply.timestamp)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM replies")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
