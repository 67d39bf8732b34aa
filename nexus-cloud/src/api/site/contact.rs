//! Contact form submission

use axum::{Json, extract::State};
use shared::models::{CONTACT_RESET_DELAY_MS, ContactAck, InquiryCreate};
use shared::util::{now_millis, snowflake_id};

use crate::db;
use crate::error::ServiceError;
use crate::live::ChangeKind;
use crate::state::AppState;

use super::super::ApiResult;

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<InquiryCreate>,
) -> ApiResult<ContactAck> {
    req.validate()?;

    let inquiry = req.into_inquiry(snowflake_id(), now_millis());
    db::inquiries::create(&state.pool, &inquiry)
        .await
        .map_err(ServiceError::from)?;

    tracing::info!(inquiry_id = inquiry.id, country = %inquiry.country, "Contact form submitted");
    state.inquiry_feed.notify(inquiry.id, ChangeKind::Created);

    Ok(Json(ContactAck {
        id: inquiry.id,
        message: "Thank you! Your message has been sent successfully.".to_string(),
        reset_after_ms: CONTACT_RESET_DELAY_MS,
    }))
}
