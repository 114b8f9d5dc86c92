//! AI-audio content tree handlers.

use axum::extract::{Path, State};
use axum::Json;

use satsang_core::types::DocumentId;
use satsang_entity::audio_tree::{
    AudioCategory, AudioCategoryPatch, AudioChapter, AudioChapterPatch, AudioItem, AudioItemPatch,
    CategoryWithContent,
};

use crate::dto::request::{CreateCategoryRequest, CreateChapterRequest, CreateItemRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

// ── Categories ───────────────────────────────────────────────────

/// GET /api/audio/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthSession,
) -> Result<Json<ApiResponse<Vec<AudioCategory>>>, ApiError> {
    let categories = state.tree_service.list_categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// GET /api/audio/categories/full
pub async fn list_categories_full(
    State(state): State<AppState>,
    _auth: AuthSession,
) -> Result<Json<ApiResponse<Vec<CategoryWithContent>>>, ApiError> {
    let tree = state.tree_service.get_all_categories_with_content().await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/audio/categories
pub async fn create_category(
    State(state): State<AppState>,
    _auth: AuthSession,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<ApiResponse<AudioCategory>>, ApiError> {
    let category = state.tree_service.create_category(req.into_create()?).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// GET /api/audio/categories/{id}/full
pub async fn get_category_full(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<CategoryWithContent>>, ApiError> {
    let tree = state.tree_service.get_category_with_content(&id).await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// PUT /api/audio/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
    Json(patch): Json<AudioCategoryPatch>,
) -> Result<Json<ApiResponse<AudioCategory>>, ApiError> {
    let category = state.tree_service.update_category(&id, patch).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/audio/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tree_service.delete_category(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Category deleted".to_string(),
    })))
}

// ── Chapters ─────────────────────────────────────────────────────

/// GET /api/audio/categories/{id}/chapters
pub async fn list_chapters(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<Vec<AudioChapter>>>, ApiError> {
    let chapters = state.tree_service.list_chapters(&id).await?;
    Ok(Json(ApiResponse::ok(chapters)))
}

/// POST /api/audio/chapters
pub async fn create_chapter(
    State(state): State<AppState>,
    _auth: AuthSession,
    Json(req): Json<CreateChapterRequest>,
) -> Result<Json<ApiResponse<AudioChapter>>, ApiError> {
    let chapter = state.tree_service.create_chapter(req.into_create()?).await?;
    Ok(Json(ApiResponse::ok(chapter)))
}

/// PUT /api/audio/chapters/{id}
pub async fn update_chapter(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
    Json(patch): Json<AudioChapterPatch>,
) -> Result<Json<ApiResponse<AudioChapter>>, ApiError> {
    let chapter = state.tree_service.update_chapter(&id, patch).await?;
    Ok(Json(ApiResponse::ok(chapter)))
}

/// DELETE /api/audio/chapters/{id}
pub async fn delete_chapter(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tree_service.delete_chapter(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Chapter deleted".to_string(),
    })))
}

// ── Items ────────────────────────────────────────────────────────

/// GET /api/audio/chapters/{id}/items
pub async fn list_items(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<Vec<AudioItem>>>, ApiError> {
    let items = state.tree_service.list_items(&id).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/audio/items
pub async fn create_item(
    State(state): State<AppState>,
    _auth: AuthSession,
    Json(req): Json<CreateItemRequest>,
) -> Result<Json<ApiResponse<AudioItem>>, ApiError> {
    let item = state.tree_service.create_item(req.into_create()?).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// GET /api/audio/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<AudioItem>>, ApiError> {
    let item = state.tree_service.get_item(&id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/audio/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
    Json(patch): Json<AudioItemPatch>,
) -> Result<Json<ApiResponse<AudioItem>>, ApiError> {
    let item = state.tree_service.update_item(&id, patch).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/audio/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    _auth: AuthSession,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.tree_service.delete_item(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Item deleted".to_string(),
    })))
}
