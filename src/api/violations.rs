use axum::{
    extract::{Multipart, Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tower_sessions::Session;

use super::validation::{validate_date, validate_fine_amount, validate_id, validate_required};
use super::{
    ApiError, ApiResponse, AppState, DownloadDto, MessageRequest, UpdatedCountDto,
    ViolationDetailDto, ViolationDto, ViolationRowDto,
};
use crate::api::auth::require_admin;
use crate::db::{BulkAction, ViolationEdit};
use crate::models::{Severity, ViolationFilter};

#[derive(Debug, Deserialize)]
pub struct ViolationListQuery {
    pub status: Option<String>,
    pub severity: Option<String>,
    pub date: Option<String>,
    pub barangay: Option<String>,
    pub search: Option<String>,
}

impl ViolationListQuery {
    #[must_use]
    pub fn to_filter(&self) -> ViolationFilter {
        ViolationFilter::from_params(
            self.status.as_deref(),
            self.severity.as_deref(),
            self.date.as_deref(),
            self.barangay.as_deref(),
            self.search.as_deref(),
        )
    }
}

pub async fn list_violations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViolationListQuery>,
) -> Result<Json<ApiResponse<Vec<ViolationRowDto>>>, ApiError> {
    let rows = state.store().list_violations(&query.to_filter()).await?;
    let dtos = rows.into_iter().map(ViolationRowDto::from).collect();

    Ok(Json(ApiResponse::success(dtos)))
}

pub async fn get_violation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ViolationDetailDto>>, ApiError> {
    validate_id(id, "violation")?;

    let detail = state
        .store()
        .get_violation_detail(id)
        .await?
        .ok_or_else(|| ApiError::violation_not_found(id))?;

    Ok(Json(ApiResponse::success(detail.into())))
}

/// POST /api/violations/{id}/rectify — multipart form with optional notes
/// and an optional evidence file.
pub async fn rectify_violation(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ViolationDto>>, ApiError> {
    validate_id(id, "violation")?;
    let admin = require_admin(&state, &session).await?;

    let violation = state
        .store()
        .get_violation(id)
        .await?
        .ok_or_else(|| ApiError::violation_not_found(id))?;

    if violation.status == "rectified" {
        return Err(ApiError::conflict("Violation is already rectified"));
    }

    let mut notes = None;
    let mut evidence = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid form data: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "notes" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::validation(format!("Invalid notes field: {e}")))?;
                if !text.trim().is_empty() {
                    notes = Some(text);
                }
            }
            "evidence" => {
                let original_name = field.file_name().unwrap_or("evidence").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(format!("Invalid evidence upload: {e}")))?;
                if !bytes.is_empty() {
                    let stored = state
                        .evidence()
                        .save(&original_name, &bytes)
                        .await
                        .map_err(|e| ApiError::internal(format!("Failed to store evidence: {e}")))?;
                    evidence = Some(stored);
                }
            }
            _ => {}
        }
    }

    let code = violation.violation_code.clone();
    let updated = state
        .store()
        .mark_violation_rectified(violation, notes, evidence)
        .await?;

    state
        .store()
        .log_event(
            "violation.rectified",
            "info",
            &format!("Violation {code} marked rectified"),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(updated.into())))
}

pub async fn escalate_violation(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MessageRequest>,
) -> Result<Json<ApiResponse<ViolationDto>>, ApiError> {
    validate_id(id, "violation")?;
    let admin = require_admin(&state, &session).await?;

    let violation = state
        .store()
        .get_violation(id)
        .await?
        .ok_or_else(|| ApiError::violation_not_found(id))?;

    if matches!(violation.status.as_str(), "rectified" | "waived") {
        return Err(ApiError::conflict(format!(
            "A {} violation cannot be escalated",
            violation.status
        )));
    }

    let code = violation.violation_code.clone();
    let updated = state
        .store()
        .escalate_violation(violation, payload.notes)
        .await?;

    state
        .store()
        .log_event(
            "violation.escalated",
            "warn",
            &format!("Violation {code} escalated"),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[derive(Debug, Deserialize)]
pub struct WaiveRequest {
    pub reason: String,
}

pub async fn waive_violation(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<WaiveRequest>,
) -> Result<Json<ApiResponse<ViolationDto>>, ApiError> {
    validate_id(id, "violation")?;
    let admin = require_admin(&state, &session).await?;
    let reason = validate_required(&payload.reason, "Waive reason")?.to_string();

    let violation = state
        .store()
        .get_violation(id)
        .await?
        .ok_or_else(|| ApiError::violation_not_found(id))?;

    if matches!(violation.status.as_str(), "rectified" | "waived") {
        return Err(ApiError::conflict(format!(
            "A {} violation cannot be waived",
            violation.status
        )));
    }

    let code = violation.violation_code.clone();
    let updated = state.store().waive_violation(violation, reason).await?;

    state
        .store()
        .log_event(
            "violation.waived",
            "info",
            &format!("Violation {code} waived"),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[derive(Debug, Deserialize)]
pub struct EditViolationRequest {
    pub severity: String,
    pub fine_amount: Option<f64>,
    pub compliance_deadline: Option<String>,
    pub admin_notes: Option<String>,
}

/// PUT /api/violations/{id}
pub async fn edit_violation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<EditViolationRequest>,
) -> Result<Json<ApiResponse<ViolationDto>>, ApiError> {
    validate_id(id, "violation")?;

    let severity = Severity::from_str(&payload.severity)?;
    if let Some(amount) = payload.fine_amount {
        validate_fine_amount(amount)?;
    }
    if let Some(deadline) = payload.compliance_deadline.as_deref() {
        validate_date(deadline, "compliance deadline")?;
    }

    let violation = state
        .store()
        .get_violation(id)
        .await?
        .ok_or_else(|| ApiError::violation_not_found(id))?;

    let updated = state
        .store()
        .edit_violation(
            violation,
            ViolationEdit {
                severity,
                fine_amount: payload.fine_amount,
                compliance_deadline: payload.compliance_deadline,
                admin_notes: payload.admin_notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::success(updated.into())))
}

#[derive(Debug, Deserialize)]
pub struct BulkActionRequest {
    pub action: String,
    pub ids: Vec<i32>,
}

/// POST /api/violations/bulk
pub async fn bulk_action(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<BulkActionRequest>,
) -> Result<Json<ApiResponse<UpdatedCountDto>>, ApiError> {
    let admin = require_admin(&state, &session).await?;
    let action = BulkAction::from_str(&payload.action)?;

    if payload.ids.is_empty() {
        return Err(ApiError::validation(
            "Select at least one violation for a bulk action",
        ));
    }

    let updated = state
        .store()
        .bulk_violation_action(action, &payload.ids)
        .await?;

    state
        .store()
        .log_event(
            "violation.bulk",
            "info",
            &format!("Bulk {} applied to {updated} violations", payload.action),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(UpdatedCountDto { updated })))
}

/// POST /api/violations/report — generated document for the current filters.
pub async fn generate_report(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ViolationListQuery>,
) -> Result<Json<ApiResponse<DownloadDto>>, ApiError> {
    let rows = state.store().list_violations(&query.to_filter()).await?;
    let stats = state.store().violation_stats().await?;

    let download_url = state
        .documents()
        .violation_report(&rows, stats)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to generate report: {e}")))?;

    Ok(Json(ApiResponse::success(DownloadDto { download_url })))
}
