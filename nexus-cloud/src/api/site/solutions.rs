//! Solutions showcase: gallery items with their rating summaries

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{GalleryItem, Rating, RatingCreate};
use shared::rating::RatingSummary;
use shared::util::{now_millis, snowflake_id};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;

#[derive(Serialize)]
pub struct Solution {
    #[serde(flatten)]
    pub item: GalleryItem,
    /// `None` until the first rating arrives
    pub rating: Option<RatingSummary>,
}

/// GET /api/solutions
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Solution>> {
    let (items, mut ratings) = tokio::try_join!(
        db::gallery::list(&state.pool),
        db::gallery::ratings_by_item(&state.pool),
    )
    .map_err(ServiceError::from)?;

    let solutions = items
        .into_iter()
        .map(|item| {
            let rating = ratings
                .remove(&item.id)
                .and_then(|r| RatingSummary::from_ratings(&r));
            Solution { item, rating }
        })
        .collect();

    Ok(Json(solutions))
}

/// GET /api/solutions/{id}/ratings
pub async fn ratings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Option<RatingSummary>> {
    let ratings = db::gallery::ratings_for(&state.pool, id)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(RatingSummary::from_ratings(&ratings)))
}

/// POST /api/solutions/{id}/ratings
pub async fn rate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RatingCreate>,
) -> ApiResult<Option<RatingSummary>> {
    req.validate()?;

    db::gallery::find_by_id(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::GalleryItemNotFound))?;

    let rating = Rating {
        id: snowflake_id(),
        gallery_id: id,
        rating: req.rating,
        timestamp: now_millis(),
    };
    db::gallery::add_rating(&state.pool, &rating)
        .await
        .map_err(ServiceError::from)?;

    tracing::debug!(gallery_id = id, rating = req.rating, "Solution rated");

    let ratings = db::gallery::ratings_for(&state.pool, id)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(RatingSummary::from_ratings(&ratings)))
}
