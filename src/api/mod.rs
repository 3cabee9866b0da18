use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::state::SharedState;

pub mod auth;
mod certificates;
mod error;
mod follow_ups;
mod observability;
mod reports;
mod system;
mod types;
mod validation;
mod violations;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn evidence(&self) -> &crate::services::EvidenceService {
        &self.shared.evidence
    }

    #[must_use]
    pub fn documents(&self) -> &crate::services::DocumentService {
        &self.shared.documents
    }
}

pub async fn create_app_state(
    shared: Arc<SharedState>,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    Ok(Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    create_app_state(shared, prometheus_handle).await
}

pub async fn router(state: Arc<AppState>) -> Router {
    let (uploads_path, cors_origins, secure_cookies, expiry_minutes) = {
        let config = state.config().read().await;
        (
            config.general.uploads_path.clone(),
            config.server.cors_allowed_origins.clone(),
            config.server.secure_cookies,
            config.server.session_expiry_minutes,
        )
    };

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            expiry_minutes,
        )));

    let api_router = Router::new()
        .merge(create_protected_router(state.clone()))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .merge(crate::web::router())
        .nest_service(
            "/uploads",
            tower_http::services::ServeDir::new(uploads_path),
        )
        .layer(session_layer)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/reports", get(reports::list_reports))
        .route("/reports/{id}", get(reports::get_report))
        .route("/reports/{id}/review", post(reports::review_report))
        .route("/reports/{id}/certificate", post(reports::issue_certificate))
        .route("/reports/summary", post(reports::generate_summary))
        .route("/violations", get(violations::list_violations))
        .route("/violations/{id}", get(violations::get_violation))
        .route("/violations/{id}", put(violations::edit_violation))
        .route("/violations/{id}/rectify", post(violations::rectify_violation))
        .route(
            "/violations/{id}/escalate",
            post(violations::escalate_violation),
        )
        .route("/violations/{id}/waive", post(violations::waive_violation))
        .route("/violations/bulk", post(violations::bulk_action))
        .route("/violations/report", post(violations::generate_report))
        .route("/follow-ups", get(follow_ups::list_follow_ups))
        .route("/follow-ups/{id}/status", post(follow_ups::update_status))
        .route("/follow-ups/{id}/assign", post(follow_ups::assign))
        .route("/follow-ups/{id}/reschedule", post(follow_ups::reschedule))
        .route("/certificates", get(certificates::list_certificates))
        .route(
            "/certificates/{id}/revoke",
            post(certificates::revoke_certificate),
        )
        .route(
            "/certificates/{id}/document",
            get(certificates::certificate_document),
        )
        .route("/system/status", get(system::get_status))
        .route("/system/logs", get(system::get_logs))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::admin_middleware,
        ))
}
