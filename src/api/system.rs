use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: String,
    pub uptime: u64,
    pub total_reports: i64,
    pub pending_review: i64,
    pub pending_violations: i64,
    pub overdue_follow_ups: i64,
    pub active_certificates: i64,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let reports = state.store().report_stats().await?;
    let violations = state.store().violation_stats().await?;
    let follow_ups = state.store().follow_up_stats().await?;
    let certificates = state.store().certificate_stats().await?;

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        total_reports: reports.total,
        pending_review: reports.pending_review,
        pending_violations: violations.pending,
        overdue_follow_ups: follow_ups.overdue,
        active_certificates: certificates.valid + certificates.expiring_soon,
    })))
}

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    #[serde(default = "default_limit")]
    pub limit: u64,
}

const fn default_limit() -> u64 {
    100
}

pub async fn get_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<ApiResponse<Vec<crate::entities::system_logs::Model>>>, ApiError> {
    if query.limit == 0 || query.limit > 1000 {
        return Err(ApiError::validation("Limit must be between 1 and 1000"));
    }

    let logs = state.store().recent_logs(query.limit).await?;
    Ok(Json(ApiResponse::success(logs)))
}
