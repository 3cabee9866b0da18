use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tower_sessions::Session;

use super::validation::{validate_date, validate_id};
use super::{ApiError, ApiResponse, AppState, FollowUpRowDto};
use crate::api::auth::require_admin;
use crate::db::StatusUpdate;
use crate::models::{FollowUpFilter, FollowUpStatus};

#[derive(Debug, Deserialize)]
pub struct FollowUpListQuery {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub follow_up_type: Option<String>,
    pub date: Option<String>,
    pub barangay: Option<String>,
    pub establishment: Option<String>,
    pub assigned_to: Option<String>,
    pub search: Option<String>,
}

impl FollowUpListQuery {
    #[must_use]
    pub fn to_filter(&self) -> FollowUpFilter {
        FollowUpFilter::from_params(
            self.status.as_deref(),
            self.follow_up_type.as_deref(),
            self.date.as_deref(),
            self.barangay.as_deref(),
            self.establishment.as_deref(),
            self.assigned_to.as_deref(),
            self.search.as_deref(),
        )
    }
}

pub async fn list_follow_ups(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FollowUpListQuery>,
) -> Result<Json<ApiResponse<Vec<FollowUpRowDto>>>, ApiError> {
    let rows = state.store().list_follow_ups(&query.to_filter()).await?;
    let dtos = rows.into_iter().map(FollowUpRowDto::from).collect();

    Ok(Json(ApiResponse::success(dtos)))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
    pub outcome: Option<String>,
    #[serde(default)]
    pub compliance_verified: bool,
}

/// POST /api/follow-ups/{id}/status
///
/// When compliance is verified, every pending violation on the same
/// inspection is marked rectified.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<StatusUpdateRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    validate_id(id, "follow-up")?;
    let admin = require_admin(&state, &session).await?;
    let status = FollowUpStatus::from_str(&payload.status)?;

    let follow_up = state
        .store()
        .get_follow_up(id)
        .await?
        .ok_or_else(|| ApiError::follow_up_not_found(id))?;

    let inspection_id = follow_up.inspection_id;
    let updated = state
        .store()
        .update_follow_up_status(
            follow_up,
            StatusUpdate {
                status,
                outcome: payload.outcome,
                compliance_verified: payload.compliance_verified,
                verifier_id: admin.id,
            },
        )
        .await?;

    let mut rectified = 0;
    if payload.compliance_verified {
        rectified = state
            .store()
            .rectify_pending_violations(inspection_id)
            .await?;
    }

    state
        .store()
        .log_event(
            "follow_up.updated",
            "info",
            &format!("Follow-up #{id} marked {}", updated.status),
            Some(format!(
                "admin={} compliance_verified={} rectified={rectified}",
                admin.username, payload.compliance_verified
            )),
        )
        .await?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "id": updated.id,
        "status": updated.status,
        "rectified_violations": rectified,
    }))))
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub assigned_to: i32,
}

/// POST /api/follow-ups/{id}/assign
pub async fn assign(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    validate_id(id, "follow-up")?;
    validate_id(payload.assigned_to, "user")?;
    let admin = require_admin(&state, &session).await?;

    let assignee = state
        .store()
        .get_user(payload.assigned_to)
        .await?
        .ok_or_else(|| ApiError::not_found("User", payload.assigned_to))?;

    let follow_up = state
        .store()
        .get_follow_up(id)
        .await?
        .ok_or_else(|| ApiError::follow_up_not_found(id))?;

    let updated = state
        .store()
        .assign_follow_up(follow_up, assignee.id)
        .await?;

    state
        .store()
        .log_event(
            "follow_up.assigned",
            "info",
            &format!("Follow-up #{id} assigned to {}", assignee.full_name),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "id": updated.id,
        "status": updated.status,
        "assigned_to": updated.assigned_to,
    }))))
}

#[derive(Debug, Deserialize)]
pub struct RescheduleRequest {
    pub scheduled_date: String,
}

/// POST /api/follow-ups/{id}/reschedule
pub async fn reschedule(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RescheduleRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    validate_id(id, "follow-up")?;
    let admin = require_admin(&state, &session).await?;
    validate_date(&payload.scheduled_date, "scheduled date")?;

    let follow_up = state
        .store()
        .get_follow_up(id)
        .await?
        .ok_or_else(|| ApiError::follow_up_not_found(id))?;

    let updated = state
        .store()
        .reschedule_follow_up(follow_up, payload.scheduled_date)
        .await?;

    state
        .store()
        .log_event(
            "follow_up.rescheduled",
            "info",
            &format!("Follow-up #{id} rescheduled to {}", updated.scheduled_date),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "id": updated.id,
        "status": updated.status,
        "scheduled_date": updated.scheduled_date,
    }))))
}
