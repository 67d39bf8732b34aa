use shared::models::Article;
use sqlx::PgPool;

const COLUMNS: &str = "id, title, content, category, tags, published, created_at, updated_at";

/// Newest first
pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM articles ORDER BY created_at DESC"))
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, article: &Article) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO articles (id, title, content, category, tags, published, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(article.id)
    .bind(&article.title)
    .bind(&article.content)
    .bind(&article.category)
    .bind(&article.tags)
    .bind(article.published)
    .bind(article.created_at)
    .bind(article.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Overwrite editable fields; `created_at` is preserved
pub async fn update(pool: &PgPool, article: &Article) -> Result<Option<Article>, sqlx::Error> {
    sqlx::query_as(&format!(
        "UPDATE articles
         SET title = $1, content = $2, category = $3, tags = $4, published = $5, updated_at = $6
         WHERE id = $7
         RETURNING {COLUMNS}"
    ))
    .bind(&article.title)
    .bind(&article.content)
    .bind(&article.category)
    .bind(&article.tags)
    .bind(article.published)
    .bind(article.updated_at)
    .bind(article.id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM articles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles WHERE published")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
