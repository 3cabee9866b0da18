//! Server-rendered admin dashboards.
//!
//! Pages enforce the session gate themselves: no session redirects to
//! /login, a non-admin session redirects to /unauthorized. The JSON API
//! under /api does the same check but answers with status codes.

pub mod badges;
mod style;
pub mod templates;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_sessions::Session;

use crate::api::{auth::session_user, AppState};
use crate::db::User;
use crate::models::{CertificateFilter, FollowUpFilter, ReportFilter, ViolationFilter};
use templates::FilterEcho;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/login", get(login))
        .route("/unauthorized", get(unauthorized))
        .route("/admin/reports", get(reports_page))
        .route("/admin/violations", get(violations_page))
        .route("/admin/follow-ups", get(follow_ups_page))
        .route("/admin/certificates", get(certificates_page))
        .route("/static/dashboard.css", get(stylesheet))
}

enum PageError {
    NotAuthenticated,
    NotAuthorized,
    Internal(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => Redirect::to("/login").into_response(),
            Self::NotAuthorized => Redirect::to("/unauthorized").into_response(),
            Self::Internal(message) => {
                tracing::error!("Page render failed: {}", message);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Something went wrong</h1>".to_string()),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<crate::api::ApiError> for PageError {
    fn from(err: crate::api::ApiError) -> Self {
        Self::Internal(err.to_string())
    }
}

async fn page_admin(state: &AppState, session: &Session) -> Result<User, PageError> {
    match session_user(state, session).await? {
        Some(user) if user.role == "ADMIN" => Ok(user),
        Some(_) => Err(PageError::NotAuthorized),
        None => Err(PageError::NotAuthenticated),
    }
}

fn echo_from(params: &HashMap<String, String>, default_status: &str) -> FilterEcho {
    let get = |key: &str| params.get(key).cloned().unwrap_or_default();
    let mut echo = FilterEcho {
        status: get("status"),
        kind: get("type"),
        severity: get("severity"),
        date: get("date"),
        search: get("search"),
        barangay: get("barangay"),
        establishment: get("establishment"),
        establishment_type: get("establishment_type"),
        assigned_to: get("assigned_to"),
    };
    if echo.status.is_empty() {
        echo.status = default_status.to_string();
    }
    echo
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str)
}

async fn index(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Redirect, PageError> {
    page_admin(&state, &session).await?;
    Ok(Redirect::to("/admin/reports"))
}

async fn login() -> Html<String> {
    Html(templates::login_page())
}

async fn unauthorized() -> Html<String> {
    Html(templates::unauthorized_page())
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], style::STYLESHEET)
}

async fn reports_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let user = page_admin(&state, &session).await?;

    let filter = ReportFilter::from_params(
        param(&params, "status"),
        param(&params, "date"),
        param(&params, "search"),
        param(&params, "barangay"),
        param(&params, "establishment_type"),
    );

    let rows = state.store().list_reports(&filter).await?;
    let stats = state.store().report_stats().await?;
    let barangays = state.store().distinct_barangays().await?;
    let types = state.store().distinct_establishment_types().await?;
    let echo = echo_from(&params, "submitted");

    Ok(Html(templates::reports_page(
        &user, &echo, &rows, &stats, &barangays, &types,
    )))
}

async fn violations_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let user = page_admin(&state, &session).await?;

    let filter = ViolationFilter::from_params(
        param(&params, "status"),
        param(&params, "severity"),
        param(&params, "date"),
        param(&params, "barangay"),
        param(&params, "search"),
    );

    let rows = state.store().list_violations(&filter).await?;
    let stats = state.store().violation_stats().await?;
    let barangays = state.store().distinct_barangays().await?;
    let echo = echo_from(&params, "pending");

    Ok(Html(templates::violations_page(
        &user, &echo, &rows, &stats, &barangays,
    )))
}

async fn follow_ups_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let user = page_admin(&state, &session).await?;

    let filter = FollowUpFilter::from_params(
        param(&params, "status"),
        param(&params, "type"),
        param(&params, "date"),
        param(&params, "barangay"),
        param(&params, "establishment"),
        param(&params, "assigned_to"),
        param(&params, "search"),
    );

    let rows = state.store().list_follow_ups(&filter).await?;
    let stats = state.store().follow_up_stats().await?;
    let barangays = state.store().distinct_barangays().await?;
    let establishments: Vec<(i32, String)> = state
        .store()
        .list_establishments()
        .await?
        .into_iter()
        .map(|e| (e.id, e.establishment_name))
        .collect();
    let employees: Vec<(i32, String)> = state
        .store()
        .list_users_by_role("EMPLOYEE")
        .await?
        .into_iter()
        .map(|u| (u.id, u.full_name))
        .collect();
    let echo = echo_from(&params, "all");

    Ok(Html(templates::follow_ups_page(
        &user,
        &echo,
        &rows,
        &stats,
        &barangays,
        &establishments,
        &employees,
    )))
}

async fn certificates_page(
    State(state): State<Arc<AppState>>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, PageError> {
    let user = page_admin(&state, &session).await?;

    let filter = CertificateFilter::from_params(
        param(&params, "status"),
        param(&params, "certificate_type"),
        param(&params, "date"),
        param(&params, "barangay"),
        param(&params, "establishment_type"),
        param(&params, "search"),
    );

    let rows = state.store().list_certificates(&filter).await?;
    let stats = state.store().certificate_stats().await?;
    let barangays = state.store().distinct_barangays().await?;
    let types = state.store().distinct_establishment_types().await?;
    let mut echo = echo_from(&params, "all");
    echo.kind = params
        .get("certificate_type")
        .cloned()
        .unwrap_or_default();

    Ok(Html(templates::certificates_page(
        &user, &echo, &rows, &stats, &barangays, &types,
    )))
}
