//! Customer groups and their membership

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::filter::search_customers;
use shared::membership::{MembershipChange, resolve_members};
use shared::models::{
    CustomerGroup, CustomerGroupCreate, CustomerGroupUpdate, CustomerSummary, Inquiry,
};
use shared::util::{now_millis, snowflake_id};

use crate::auth::AdminIdentity;
use crate::db;
use crate::db::customer_groups::MembershipUpdate;
use crate::error::ServiceError;
use crate::state::AppState;

use super::super::ApiResult;
use super::record_activity;

fn group_not_found() -> AppError {
    AppError::new(ErrorCode::CustomerGroupNotFound)
}

/// GET /api/admin/customer-groups
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<CustomerGroup>> {
    let groups = db::customer_groups::list(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(groups))
}

/// POST /api/admin/customer-groups
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Json(req): Json<CustomerGroupCreate>,
) -> ApiResult<CustomerGroup> {
    req.validate()?;

    let customers = req
        .customers
        .iter()
        .fold(Vec::new(), |acc, id| shared::membership::add_member(&acc, *id));
    let group = CustomerGroup {
        id: snowflake_id(),
        name: req.name.trim().to_string(),
        customers,
        version: 0,
        created_at: now_millis(),
        updated_at: None,
    };
    db::customer_groups::create(&state.pool, &group)
        .await
        .map_err(ServiceError::from)?;

    record_activity(
        &state,
        "group_create",
        &format!("Created customer group {}", group.name),
        &identity.email,
    )
    .await;
    Ok(Json(group))
}

/// PUT /api/admin/customer-groups/{id}
pub async fn rename(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
    Json(req): Json<CustomerGroupUpdate>,
) -> ApiResult<CustomerGroup> {
    req.validate()?;
    let group = db::customer_groups::rename(&state.pool, id, req.name.trim(), now_millis())
        .await
        .map_err(ServiceError::from)?
        .ok_or_else(group_not_found)?;

    record_activity(
        &state,
        "group_update",
        &format!("Renamed customer group to {}", group.name),
        &identity.email,
    )
    .await;
    Ok(Json(group))
}

/// DELETE /api/admin/customer-groups/{id}
pub async fn remove(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    Path(id): Path<i64>,
) -> ApiResult<bool> {
    if !db::customer_groups::delete(&state.pool, id)
        .await
        .map_err(ServiceError::from)?
    {
        return Err(group_not_found());
    }
    record_activity(&state, "group_delete", &format!("Deleted customer group {id}"), &identity.email)
        .await;
    Ok(Json(true))
}

/// PUT /api/admin/customer-groups/{id}/members/{customer_id}
pub async fn add_member(
    state: State<AppState>,
    identity: Extension<AdminIdentity>,
    Path((id, customer_id)): Path<(i64, i64)>,
) -> ApiResult<CustomerGroup> {
    change_members(state, identity, id, MembershipChange::Add(customer_id)).await
}

/// DELETE /api/admin/customer-groups/{id}/members/{customer_id}
pub async fn remove_member(
    state: State<AppState>,
    identity: Extension<AdminIdentity>,
    Path((id, customer_id)): Path<(i64, i64)>,
) -> ApiResult<CustomerGroup> {
    change_members(state, identity, id, MembershipChange::Remove(customer_id)).await
}

async fn change_members(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
    id: i64,
    change: MembershipChange,
) -> ApiResult<CustomerGroup> {
    let outcome = db::customer_groups::update_members(&state.pool, id, change, now_millis())
        .await
        .map_err(ServiceError::from)?;

    let group = match outcome {
        MembershipUpdate::Updated(group) => group,
        MembershipUpdate::NotFound => return Err(group_not_found()),
        MembershipUpdate::Conflict => return Err(AppError::new(ErrorCode::Conflict)),
    };

    let detail = match change {
        MembershipChange::Add(c) => format!("Added customer {c} to {}", group.name),
        MembershipChange::Remove(c) => format!("Removed customer {c} from {}", group.name),
    };
    record_activity(&state, "group_members", &detail, &identity.email).await;
    Ok(Json(group))
}

/// GET /api/admin/customer-groups/{id}/members
pub async fn members(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<CustomerSummary>> {
    let (group, inquiries) = tokio::try_join!(
        db::customer_groups::find_by_id(&state.pool, id),
        db::inquiries::list_all(&state.pool),
    )
    .map_err(ServiceError::from)?;
    let group = group.ok_or_else(group_not_found)?;

    let members = resolve_members(&group, &inquiries)
        .into_iter()
        .map(CustomerSummary::from)
        .collect();
    Ok(Json(members))
}

#[derive(Deserialize)]
pub struct CustomerQuery {
    pub search: Option<String>,
}

/// GET /api/admin/customers?search=
///
/// Every inquiry is a potential group member.
pub async fn customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerQuery>,
) -> ApiResult<Vec<CustomerSummary>> {
    let inquiries: Vec<Inquiry> = db::inquiries::list_all(&state.pool)
        .await
        .map_err(ServiceError::from)?;
    let all: Vec<CustomerSummary> = inquiries.iter().map(CustomerSummary::from).collect();
    Ok(Json(search_customers(&all, query.search.as_deref())))
}
