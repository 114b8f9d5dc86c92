//! Generic handlers for the flat catalog collections.
//!
//! Every collection (books, bhajans, wallpapers, events, slides, admin
//! users) is served by these five handlers, instantiated per entity in
//! the router via [`CatalogEntity`].

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::de::DeserializeOwned;

use satsang_core::types::{DocumentId, PageResponse};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthSession, PaginationParams};
use crate::state::{AppState, CatalogEntity};

/// GET /api/{collection}
pub async fn list<T: CatalogEntity>(
    State(state): State<AppState>,
    _auth: AuthSession,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<T>>>, ApiError> {
    let page = T::service(&state)
        .list(&params.page_request(), params.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/{collection}/{id}
pub async fn get<T: CatalogEntity>(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<T>>, ApiError> {
    let record = T::service(&state).get(&id).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// POST /api/{collection}
pub async fn create<T: CatalogEntity>(
    State(state): State<AppState>,
    _auth: AuthSession,
    Json(payload): Json<T::Create>,
) -> Result<Json<ApiResponse<T>>, ApiError>
where
    T::Create: DeserializeOwned,
{
    let record = T::service(&state).create(payload).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// PUT /api/{collection}/{id}
pub async fn update<T: CatalogEntity>(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
    Json(patch): Json<T::Patch>,
) -> Result<Json<ApiResponse<T>>, ApiError>
where
    T::Patch: DeserializeOwned,
{
    let record = T::service(&state).update(&id, patch).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// DELETE /api/{collection}/{id}
pub async fn delete<T: CatalogEntity>(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    T::service(&state).delete(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Record deleted".to_string(),
    })))
}
