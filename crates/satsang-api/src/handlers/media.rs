//! Media upload handler.

use axum::extract::{Multipart, State};
use axum::Json;

use satsang_core::error::AppError;
use satsang_core::traits::MediaUpload;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthSession;
use crate::state::AppState;

/// POST /api/media/upload
///
/// Accepts a multipart form with a `file` part and an optional `folder`
/// part overriding the configured destination folder.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthSession,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<MediaUpload>>, ApiError> {
    let mut file: Option<(String, bytes::Bytes)> = None;
    let mut folder = state.config.media.folder.clone();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(String::from)
                    .ok_or_else(|| AppError::validation("file part requires a filename"))?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file part: {e}")))?;
                file = Some((file_name, data));
            }
            Some("folder") => {
                folder = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read folder part: {e}")))?;
            }
            _ => {}
        }
    }

    let (file_name, data) =
        file.ok_or_else(|| AppError::validation("Multipart body requires a file part"))?;
    if data.is_empty() {
        return Err(AppError::validation("Uploaded file is empty").into());
    }

    let uploaded = state.media.upload(data, &file_name, &folder).await?;
    Ok(Json(ApiResponse::ok(uploaded)))
}
