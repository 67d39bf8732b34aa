//! Back-office endpoints, split into sub-modules by screen
//!
//! Everything here sits behind `admin_auth_middleware`, except `login`
//! (rate limited instead) and the live feed (token in query string).

mod analytics;
mod articles;
mod customer_groups;
mod dashboard;
mod enquiries;
pub mod enquiry_ws;
mod events;
mod gallery;
mod inquiries;
pub mod session;

use axum::Router;
use axum::routing::{delete, get, patch, post, put};
use shared::error::{AppError, ErrorCode};
use shared::models::Inquiry;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// Protected back-office routes (auth layer applied by the caller)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/me", get(session::me))
        .route("/api/admin/dashboard", get(dashboard::get_dashboard))
        .route("/api/admin/analytics", get(analytics::get_analytics))
        // Inquiries
        .route("/api/admin/inquiries", get(inquiries::list))
        .route("/api/admin/inquiries/{id}", delete(inquiries::remove))
        .route("/api/admin/inquiries/{id}/status", patch(inquiries::update_status))
        .route("/api/admin/inquiries/{id}/replies", post(inquiries::reply))
        // Enquiries
        .route("/api/admin/enquiries", get(enquiries::list))
        .route("/api/admin/enquiries/{id}/respond", post(enquiries::respond))
        // Customer groups
        .route(
            "/api/admin/customer-groups",
            get(customer_groups::list).post(customer_groups::create),
        )
        .route(
            "/api/admin/customer-groups/{id}",
            put(customer_groups::rename).delete(customer_groups::remove),
        )
        .route("/api/admin/customer-groups/{id}/members", get(customer_groups::members))
        .route(
            "/api/admin/customer-groups/{id}/members/{customer_id}",
            put(customer_groups::add_member).delete(customer_groups::remove_member),
        )
        .route("/api/admin/customers", get(customer_groups::customers))
        // Content
        .route("/api/admin/articles", get(articles::list).post(articles::create))
        .route(
            "/api/admin/articles/{id}",
            put(articles::update).delete(articles::remove),
        )
        .route("/api/admin/events", get(events::list).post(events::create))
        .route("/api/admin/events/{id}", put(events::update).delete(events::remove))
        .route("/api/admin/gallery", get(gallery::list).post(gallery::upload))
        .route("/api/admin/gallery/{id}", delete(gallery::remove))
}

/// Load an inquiry or fail with `InquiryNotFound`
async fn find_inquiry(state: &AppState, id: i64) -> Result<Inquiry, AppError> {
    db::inquiries::find_by_id(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::InquiryNotFound))
}

/// Append to the activity log; failures are logged and swallowed
async fn record_activity(state: &AppState, action: &str, detail: &str, actor: &str) {
    if let Err(e) = db::activities::log(&state.pool, action, detail, actor).await {
        tracing::warn!(action, error = %e, "Failed to record activity");
    }
}
