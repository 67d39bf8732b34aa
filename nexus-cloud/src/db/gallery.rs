//! gallery and gallery_ratings tables

use std::collections::HashMap;

use shared::models::{GalleryItem, Rating};
use sqlx::PgPool;

const COLUMNS: &str =
    "id, title, description, category, industry, features, image_url, image_key, created_at";

/// Newest first
pub async fn list(pool: &PgPool) -> Result<Vec<GalleryItem>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM gallery ORDER BY created_at DESC"))
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<GalleryItem>, sqlx::Error> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM gallery WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, item: &GalleryItem) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO gallery
            (id, title, description, category, industry, features, image_url, image_key, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(item.id)
    .bind(&item.title)
    .bind(&item.description)
    .bind(&item.category)
    .bind(&item.industry)
    .bind(&item.features)
    .bind(&item.image_url)
    .bind(&item.image_key)
    .bind(item.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Ratings go with the item (ON DELETE CASCADE)
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM gallery WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn add_rating(pool: &PgPool, rating: &Rating) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO gallery_ratings (id, gallery_id, rating, timestamp) VALUES ($1, $2, $3, $4)",
    )
    .bind(rating.id)
    .bind(rating.gallery_id)
    .bind(rating.rating)
    .bind(rating.timestamp)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn ratings_for(pool: &PgPool, gallery_id: i64) -> Result<Vec<i32>, sqlx::Error> {
    let rows: Vec<(i32,)> =
        sqlx::query_as("SELECT rating FROM gallery_ratings WHERE gallery_id = $1")
            .bind(gallery_id)
            .fetch_all(pool)
            .await?;
    Ok(rows.into_iter().map(|(r,)| r).collect())
}

/// Every rating, grouped by gallery item
pub async fn ratings_by_item(pool: &PgPool) -> Result<HashMap<i64, Vec<i32>>, sqlx::Error> {
    let rows: Vec<(i64, i32)> = sqlx::query_as("SELECT gallery_id, rating FROM gallery_ratings")
        .fetch_all(pool)
        .await?;

    let mut grouped: HashMap<i64, Vec<i32>> = HashMap::new();
    for (gallery_id, rating) in rows {
        grouped.entry(gallery_id).or_default().push(rating);
    }
    Ok(grouped)
}
