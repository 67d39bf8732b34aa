use axum::{Json, extract::State};
use serde::Serialize;
use shared::analytics::InquiryAnalytics;
use shared::util::now_millis;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;

#[derive(Serialize)]
pub struct AnalyticsView {
    #[serde(flatten)]
    pub analytics: InquiryAnalytics,
    /// Stat card text, "N/A" for an empty inbox
    pub response_rate_label: String,
}

/// GET /api/admin/analytics
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<AnalyticsView> {
    let (inquiries, replies) = tokio::try_join!(
        db::inquiries::list_all(&state.pool),
        db::replies::count(&state.pool),
    )
    .map_err(ServiceError::from)?;

    let analytics = InquiryAnalytics::compute(&inquiries, replies.max(0) as usize, now_millis());
    Ok(Json(AnalyticsView {
        response_rate_label: analytics.response_rate_display(),
        analytics,
    }))
}
