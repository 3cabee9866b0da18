use axum::{
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::{ApiError, ApiResponse, AppState, UserDto};
use crate::db::User;

const SESSION_USER_KEY: &str = "user_id";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authentication middleware for the JSON API: a session must exist and the
/// user must hold the ADMIN role.
pub async fn admin_middleware(
    State(state): State<Arc<AppState>>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    match session_user(&state, &session).await? {
        Some(user) if user.role == "ADMIN" => {
            tracing::Span::current().record("user_id", user.id);
            Ok(next.run(request).await)
        }
        Some(_) => Err(ApiError::Forbidden("Administrator role required".to_string())),
        None => Err(ApiError::Unauthorized("Not authenticated".to_string())),
    }
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    if payload.username.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }

    let user = state
        .store()
        .verify_user_password(&payload.username, &payload.password)
        .await
        .map_err(|e| ApiError::internal(format!("Authentication error: {e}")))?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    session
        .insert(SESSION_USER_KEY, user.id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create session: {e}")))?;

    tracing::info!("User {} logged in", user.username);

    Ok(Json(ApiResponse::success(user.into())))
}

/// POST /api/auth/logout
pub async fn logout(session: Session) -> impl IntoResponse {
    let _ = session.flush().await;
    axum::response::Redirect::to("/login")
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Json<ApiResponse<UserDto>>, ApiError> {
    let user = require_admin(&state, &session).await?;
    Ok(Json(ApiResponse::success(user.into())))
}

/// Resolve the session to a user, if any.
pub async fn session_user(state: &AppState, session: &Session) -> Result<Option<User>, ApiError> {
    let user_id: Option<i32> = session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|e| ApiError::internal(format!("Session error: {e}")))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    state
        .store()
        .get_user(user_id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to load user: {e}")))
}

/// Handlers that stamp a reviewer/verifier id resolve the acting admin here.
pub async fn require_admin(state: &AppState, session: &Session) -> Result<User, ApiError> {
    match session_user(state, session).await? {
        Some(user) if user.role == "ADMIN" => Ok(user),
        Some(_) => Err(ApiError::Forbidden("Administrator role required".to_string())),
        None => Err(ApiError::Unauthorized("Not authenticated".to_string())),
    }
}
