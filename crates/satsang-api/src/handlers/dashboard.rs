//! Dashboard summary handler.

use axum::extract::State;
use axum::Json;

use satsang_service::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthSession,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = state.dashboard_service.summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}
