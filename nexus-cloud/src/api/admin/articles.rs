use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::{Article, ArticleInput};
use shared::util::{now_millis, snowflake_id};

use crate::auth::AdminIdentity;
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;
use super::record_activity;

fn build(id: i64, input: &ArticleInput, created_at: i64, now: i64) -> Article {
    Article {
        id,
        title: input.title.trim().to_string(),
        content: input.content.clone(),
        category: input.category.trim().to_string(),
        tags: input.tag_list(),
        published: input.published,
        created_at,
        updated_at: now,
    }
}

/// GET /api/admin/articles
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Article>> {
    let articles = db::articles::list(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(articles))
}

/// POST /api/admin/articles
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Json(req): Json<ArticleInput>,
) -> ApiResult<Article> {
    req.validate()?;
    let now = now_millis();
    let article = build(snowflake_id(), &req, now, now);
    db::articles::create(&state.pool, &article)
        .await
        .map_err(ServiceError::from)?;

    record_activity(
        &state,
        "article_create",
        &format!("Created article {}", article.title),
        &identity.email,
    )
    .await;
    Ok(Json(article))
}

/// PUT /api/admin/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    Json(req): Json<ArticleInput>,
) -> ApiResult<Article> {
    req.validate()?;
    // created_at is not overwritten by the UPDATE
    let article = build(id, &req, 0, now_millis());
    let updated = db::articles::update(&state.pool, &article)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::ArticleNotFound))?;

    record_activity(
        &state,
        "article_update",
        &format!("Updated article {}", updated.title),
        &identity.email,
    )
    .await;
    Ok(Json(updated))
}

/// DELETE /api/admin/articles/{id}
pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<bool> {
    if !db::articles::delete(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
    {
        return Err(AppError::new(ErrorCode::ArticleNotFound));
    }
    record_activity(&state, "article_delete", &format!("Deleted article {id}"), &identity.email)
        .await;
    Ok(Json(true))
}
