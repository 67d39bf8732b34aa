//! Inquiry management: filtered list, status, delete, replies

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use shared::error::{AppError, ErrorCode};
use shared::filter::InquiryFilter;
use shared::models::{Inquiry, InquiryStatusUpdate, Reply, ReplyCreate};
use shared::util::{now_millis, snowflake_id};

use crate::auth::AdminIdentity;
use crate::db;
use crate::error::ServiceError;
use crate::live::ChangeKind;
use crate::state::AppState;

use super::super::ApiResult;
use super::{find_inquiry, record_activity};

/// GET /api/admin/inquiries?search=&status=&from=&to=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<InquiryFilter>,
) -> ApiResult<Vec<Inquiry>> {
    let all = db::inquiries::list_all(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(filter.apply(&all)))
}

/// PATCH /api/admin/inquiries/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    Json(req): Json<InquiryStatusUpdate>,
) -> ApiResult<Inquiry> {
    let found = db::inquiries::update_status(&state.pool, id, req.status, now_millis())
        .await
        .map_err(ServiceError::from)?;
    if !found {
        return Err(AppError::new(ErrorCode::InquiryNotFound));
    }

    state.inquiry_feed.notify(id, ChangeKind::Updated);
    record_activity(
        &state,
        "inquiry_status",
        &format!("Marked inquiry {id} as {}", req.status.as_str()),
        &identity.email,
    )
    .await;

    Ok(Json(find_inquiry(&state, id).await?))
}

/// DELETE /api/admin/inquiries/{id}
pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<bool> {
    let deleted = db::inquiries::delete(&state.pool, id)
        .await
        .map_err(ServiceError::from)?;
    if !deleted {
        return Err(AppError::new(ErrorCode::InquiryNotFound));
    }

    state.inquiry_feed.notify(id, ChangeKind::Deleted);
    record_activity(&state, "inquiry_delete", &format!("Deleted inquiry {id}"), &identity.email)
        .await;
    Ok(Json(true))
}

/// POST /api/admin/inquiries/{id}/replies
pub async fn reply(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    Json(req): Json<ReplyCreate>,
) -> ApiResult<Reply> {
    req.validate()?;
    let inquiry = find_inquiry(&state, id).await?;

    let reply = Reply {
        id: snowflake_id(),
        inquiry_id: inquiry.id,
        reply: req.reply.trim().to_string(),
        to_address: inquiry.email.clone(),
        company_name: inquiry.company.clone(),
        timestamp: now_millis(),
    };
    db::replies::create(&state.pool, &reply)
        .await
        .map_err(ServiceError::from)?;

    record_activity(
        &state,
        "inquiry_reply",
        &format!("Replied to {}", inquiry.company),
        &identity.email,
    )
    .await;
    Ok(Json(reply))
}
