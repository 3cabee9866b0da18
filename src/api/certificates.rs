use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::validation::{validate_id, validate_required};
use super::{ApiError, ApiResponse, AppState, CertificateRowDto};
use crate::api::auth::require_admin;
use crate::models::CertificateFilter;

#[derive(Debug, Deserialize)]
pub struct CertificateListQuery {
    pub status: Option<String>,
    pub certificate_type: Option<String>,
    pub date: Option<String>,
    pub barangay: Option<String>,
    pub establishment_type: Option<String>,
    pub search: Option<String>,
}

impl CertificateListQuery {
    #[must_use]
    pub fn to_filter(&self) -> CertificateFilter {
        CertificateFilter::from_params(
            self.status.as_deref(),
            self.certificate_type.as_deref(),
            self.date.as_deref(),
            self.barangay.as_deref(),
            self.establishment_type.as_deref(),
            self.search.as_deref(),
        )
    }
}

pub async fn list_certificates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CertificateListQuery>,
) -> Result<Json<ApiResponse<Vec<CertificateRowDto>>>, ApiError> {
    let rows = state.store().list_certificates(&query.to_filter()).await?;
    let dtos = rows.into_iter().map(CertificateRowDto::from).collect();

    Ok(Json(ApiResponse::success(dtos)))
}

#[derive(Debug, Deserialize)]
pub struct RevokeRequest {
    pub reason: String,
}

/// POST /api/certificates/{id}/revoke
pub async fn revoke_certificate(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RevokeRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    validate_id(id, "certificate")?;
    let admin = require_admin(&state, &session).await?;
    let reason = validate_required(&payload.reason, "Revocation reason")?.to_string();

    let certificate = state
        .store()
        .get_certificate(id)
        .await?
        .ok_or_else(|| ApiError::certificate_not_found(id))?;

    if certificate.revoked {
        return Err(ApiError::conflict("Certificate is already revoked"));
    }

    let establishment_id = certificate.establishment_id;
    let issue_date = certificate.issue_date.clone();
    let updated = state
        .store()
        .revoke_certificate(certificate, reason, admin.id)
        .await?;

    state
        .store()
        .stamp_last_inspection(establishment_id, &issue_date)
        .await?;

    state
        .store()
        .log_event(
            "certificate.revoked",
            "warn",
            &format!("Certificate {} revoked", updated.certificate_number),
            Some(format!("admin={}", admin.username)),
        )
        .await?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "id": updated.id,
        "revoked": updated.revoked,
        "revoked_at": updated.revoked_at,
    }))))
}

/// GET /api/certificates/{id}/document — printable certificate.
pub async fn certificate_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ApiError> {
    validate_id(id, "certificate")?;

    let certificate = state
        .store()
        .get_certificate(id)
        .await?
        .ok_or_else(|| ApiError::certificate_not_found(id))?;

    let establishment = state
        .store()
        .get_establishment(certificate.establishment_id)
        .await?;
    let report = state.store().get_report(certificate.inspection_id).await?;

    Ok(Html(crate::services::documents::render_certificate(
        &certificate,
        establishment.as_ref(),
        report.as_ref(),
    )))
}
