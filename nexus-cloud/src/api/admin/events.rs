use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::{Event, EventInput};
use shared::util::{now_millis, snowflake_id};

use crate::auth::AdminIdentity;
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;
use super::record_activity;

fn build(id: i64, input: &EventInput, created_at: i64, now: i64) -> Event {
    Event {
        id,
        title: input.title.trim().to_string(),
        description: input.description.clone(),
        date: input.date.trim().to_string(),
        time: input.time.trim().to_string(),
        location: input.location.trim().to_string(),
        event_type: input.event_type,
        status: input.status,
        created_at,
        updated_at: now,
    }
}

/// GET /api/admin/events (soonest first)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Event>> {
    let events = db::events::list(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(events))
}

/// POST /api/admin/events
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Json(req): Json<EventInput>,
) -> ApiResult<Event> {
    req.validate()?;
    let now = now_millis();
    let event = build(snowflake_id(), &req, now, now);
    db::events::create(&state.pool, &event)
        .await
        .map_err(ServiceError::from)?;

    record_activity(
        &state,
        "event_create",
        &format!("Created event {}", event.title),
        &identity.email,
    )
    .await;
    Ok(Json(event))
}

/// PUT /api/admin/events/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    Json(req): Json<EventInput>,
) -> ApiResult<Event> {
    req.validate()?;
    let event = build(id, &req, 0, now_millis());
    let updated = db::events::update(&state.pool, &event)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::EventNotFound))?;

    record_activity(
        &state,
        "event_update",
        &format!("Updated event {}", updated.title),
        &identity.email,
    )
    .await;
    Ok(Json(updated))
}

/// DELETE /api/admin/events/{id}
pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<bool> {
    if !db::events::delete(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
    {
        return Err(AppError::new(ErrorCode::EventNotFound));
    }
    record_activity(&state, "event_delete", &format!("Deleted event {id}"), &identity.email)
        .await;
    Ok(Json(true))
}
