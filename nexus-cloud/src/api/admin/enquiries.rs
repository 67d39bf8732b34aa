//! Enquiry inbox: full list and respond-by-email

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use shared::error::{AppError, ErrorCode};
use shared::models::{EmailQueueEntry, Inquiry, RespondRequest};
use shared::util::{now_millis, snowflake_id};

use crate::auth::AdminIdentity;
use crate::db;
use crate::db::inquiries::ResponseRecord;
use crate::error::ServiceError;
use crate::live::ChangeKind;
use crate::state::AppState;

use super::super::ApiResult;
use super::{find_inquiry, record_activity};

/// GET /api/admin/enquiries (newest first)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Inquiry>> {
    let all = db::inquiries::list_all(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(all))
}

/// POST /api/admin/enquiries/{id}/respond
///
/// Stores the response on the enquiry and queues the outgoing email in the
/// same transaction.
pub async fn respond(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    Json(req): Json<RespondRequest>,
) -> ApiResult<Inquiry> {
    req.validate()?;
    let inquiry = find_inquiry(&state, id).await?;

    let now = now_millis();
    let response = req.response.trim();
    let email = EmailQueueEntry::for_enquiry_response(
        snowflake_id(),
        &inquiry,
        response,
        &state.email_sender_name,
        now,
    );

    let record = db::inquiries::record_response(&state.pool, id, response, &email, now)
        .await
        .map_err(ServiceError::from)?;
    ensure_recorded(record)?;

    tracing::info!(inquiry_id = id, to = %email.to_address, "Enquiry response queued");
    state.inquiry_feed.notify(id, ChangeKind::Updated);
    record_activity(
        &state,
        "enquiry_response",
        &format!("Responded to enquiry from {}", inquiry.company),
        &identity.email,
    )
    .await;

    Ok(Json(find_inquiry(&state, id).await?))
}

/// A response to an inquiry deleted mid-request is a 404, not a backend failure
fn ensure_recorded(record: ResponseRecord) -> Result<(), AppError> {
    match record {
        ResponseRecord::Recorded => Ok(()),
        ResponseRecord::NotFound => Err(AppError::new(ErrorCode::InquiryNotFound)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn vanished_inquiry_maps_to_not_found() {
        assert!(ensure_recorded(ResponseRecord::Recorded).is_ok());

        let err = ensure_recorded(ResponseRecord::NotFound).unwrap_err();
        assert_eq!(err.code, ErrorCode::InquiryNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }
}
