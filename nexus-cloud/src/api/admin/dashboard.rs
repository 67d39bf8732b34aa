//! Dashboard overview: stat cards, charts and recent activity

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use shared::analytics::{SeriesPoint, inquiry_day_series, solution_distribution, visitor_series};
use shared::models::{Activity, Inquiry};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;

const RECENT_ACTIVITY_LIMIT: i64 = 5;
const VISITOR_DAYS: i64 = 7;
const LATEST_INQUIRIES: i64 = 7;

#[derive(Serialize)]
pub struct Dashboard {
    pub recent_activities: Vec<Activity>,
    /// Oldest day first
    pub visitors: Vec<SeriesPoint>,
    pub total_visitors: i64,
    pub latest_inquiries: Vec<Inquiry>,
    pub inquiry_series: Vec<SeriesPoint>,
    /// Solutions per industry
    pub solution_distribution: BTreeMap<String, usize>,
    pub total_solutions: usize,
    pub published_articles: i64,
    pub upcoming_events: usize,
}

/// GET /api/admin/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let pool = &state.pool;
    let (activities, visitor_days, latest, gallery, published_articles, events) = tokio::try_join!(
        db::activities::latest(pool, RECENT_ACTIVITY_LIMIT),
        db::visitors::latest(pool, VISITOR_DAYS),
        db::inquiries::list_latest(pool, LATEST_INQUIRIES),
        db::gallery::list(pool),
        db::articles::count_published(pool),
        db::events::list(pool),
    )
    .map_err(ServiceError::from)?;

    let (visitors, total_visitors) = visitor_series(&visitor_days);
    let today = Utc::now().date_naive();

    Ok(Json(Dashboard {
        recent_activities: activities,
        visitors,
        total_visitors,
        inquiry_series: inquiry_day_series(&latest),
        latest_inquiries: latest,
        solution_distribution: solution_distribution(&gallery),
        total_solutions: gallery.len(),
        published_articles,
        upcoming_events: events.iter().filter(|e| e.is_upcoming(today)).count(),
    }))
}
