//! Visitor counter ping

use axum::{Json, extract::State};
use serde::Serialize;
use shared::util::{day_key, now_millis};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;

#[derive(Serialize)]
pub struct VisitRecorded {
    pub day: String,
    pub count: i64,
}

/// POST /api/visits
pub async fn record(State(state): State<AppState>) -> ApiResult<VisitRecorded> {
    let now = now_millis();
    let day = day_key(now);
    let count = db::visitors::record_visit(&state.pool, &day, now)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(VisitRecorded { day, count }))
}
