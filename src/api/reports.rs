use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tower_sessions::Session;

use super::validation::validate_id;
use super::{ApiError, ApiResponse, AppState, DownloadDto, ReportDetailDto, ReportRowDto};
use crate::api::auth::require_admin;
use crate::models::{label, ReportFilter, ReviewDecision};

#[derive(Debug, Deserialize)]
pub struct ReportListQuery {
    pub status: Option<String>,
    pub date: Option<String>,
    pub search: Option<String>,
    pub barangay: Option<String>,
    pub establishment_type: Option<String>,
}

impl ReportListQuery {
    #[must_use]
    pub fn to_filter(&self) -> ReportFilter {
        ReportFilter::from_params(
            self.status.as_deref(),
            self.date.as_deref(),
            self.search.as_deref(),
            self.barangay.as_deref(),
            self.establishment_type.as_deref(),
        )
    }
}

pub async fn list_reports(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportListQuery>,
) -> Result<Json<ApiResponse<Vec<ReportRowDto>>>, ApiError> {
    let rows = state.store().list_reports(&query.to_filter()).await?;
    let dtos = rows.into_iter().map(ReportRowDto::from).collect();

    Ok(Json(ApiResponse::success(dtos)))
}

pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReportDetailDto>>, ApiError> {
    validate_id(id, "report")?;

    let detail = state
        .store()
        .get_report_detail(id)
        .await?
        .ok_or_else(|| ApiError::report_not_found(id))?;

    let certificate = state.store().active_certificate_for_inspection(id).await?;

    Ok(Json(ApiResponse::success(ReportDetailDto::build(
        detail,
        certificate,
    ))))
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub decision: String,
    pub notes: Option<String>,
}

/// POST /api/reports/{id}/review — approve, reject, or request revision.
pub async fn review_report(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<ReportDetailDto>>, ApiError> {
    validate_id(id, "report")?;
    let admin = require_admin(&state, &session).await?;
    let decision = ReviewDecision::from_str(&payload.decision)?;

    let report = state
        .store()
        .get_report(id)
        .await?
        .ok_or_else(|| ApiError::report_not_found(id))?;

    if !matches!(report.status.as_str(), "submitted" | "under_review") {
        return Err(ApiError::conflict(format!(
            "Report {} is {} and can no longer be adjudicated",
            report.report_number,
            label(&report.status)
        )));
    }

    let report_number = report.report_number.clone();
    let updated = state
        .store()
        .review_report(report, decision, payload.notes, admin.id)
        .await?;

    state
        .store()
        .log_event(
            "report.reviewed",
            "info",
            &format!("Report {} marked {}", report_number, updated.status),
            Some(format!("reviewer={}", admin.username)),
        )
        .await?;

    let detail = state
        .store()
        .get_report_detail(updated.id)
        .await?
        .ok_or_else(|| ApiError::report_not_found(id))?;
    let certificate = state.store().active_certificate_for_inspection(id).await?;

    Ok(Json(ApiResponse::success(ReportDetailDto::build(
        detail,
        certificate,
    ))))
}

#[derive(Debug, Deserialize)]
pub struct IssueCertificateRequest {
    pub certificate_type: String,
    pub valid_months: Option<u32>,
}

/// POST /api/reports/{id}/certificate — issue an FSIC for an approved report.
pub async fn issue_certificate(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<IssueCertificateRequest>,
) -> Result<Json<ApiResponse<super::CertificateRowDto>>, ApiError> {
    validate_id(id, "report")?;
    let admin = require_admin(&state, &session).await?;

    let report = state
        .store()
        .get_report(id)
        .await?
        .ok_or_else(|| ApiError::report_not_found(id))?;

    if report.status != "approved" {
        return Err(ApiError::conflict(format!(
            "Only approved reports can receive a certificate; report {} is {}",
            report.report_number,
            label(&report.status)
        )));
    }

    if state
        .store()
        .active_certificate_for_inspection(id)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict(
            "An active certificate already exists for this report",
        ));
    }

    let certificate = state
        .store()
        .issue_certificate(crate::services::documents::build_certificate(
            &report,
            &payload.certificate_type,
            payload.valid_months.unwrap_or(12),
            admin.id,
        )?)
        .await?;

    state
        .store()
        .stamp_last_inspection(report.establishment_id, &certificate.issue_date)
        .await?;

    state
        .store()
        .log_event(
            "certificate.issued",
            "info",
            &format!(
                "Certificate {} issued for report {}",
                certificate.certificate_number, report.report_number
            ),
            Some(format!("issuer={}", admin.username)),
        )
        .await?;

    let rows = state
        .store()
        .list_certificates(&crate::models::CertificateFilter::default())
        .await?;
    let dto = rows
        .into_iter()
        .find(|row| row.certificate.id == certificate.id)
        .map(super::CertificateRowDto::from)
        .ok_or_else(|| ApiError::internal("Issued certificate vanished"))?;

    Ok(Json(ApiResponse::success(dto)))
}

/// POST /api/reports/summary — write a filtered summary document and hand
/// back its download URL.
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ReportListQuery>,
) -> Result<Json<ApiResponse<DownloadDto>>, ApiError> {
    let filter = query.to_filter();
    let rows = state.store().list_reports(&filter).await?;
    let stats = state.store().report_stats().await?;

    let download_url = state
        .documents()
        .inspection_summary(&rows, stats)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to generate summary: {e}")))?;

    Ok(Json(ApiResponse::success(DownloadDto { download_url })))
}
