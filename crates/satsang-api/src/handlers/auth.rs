//! Auth handlers. Login, logout, me.

use axum::extract::State;
use axum::Json;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let session = state.auth.sign_in(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(LoginResponse {
        token: session.token,
        identity: session.identity,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthSession,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.auth.sign_out(&auth.token).await;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Signed out".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    auth: AuthSession,
) -> Result<Json<ApiResponse<satsang_core::traits::Identity>>, ApiError> {
    Ok(Json(ApiResponse::ok(auth.identity)))
}
