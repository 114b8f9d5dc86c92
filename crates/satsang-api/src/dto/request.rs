//! Request DTOs with validation.
//!
//! Create requests for the content tree validate display text before
//! anything touches the store; the store itself never re-validates.
//! Patch bodies deserialize straight into the entity patch types.

use serde::{Deserialize, Serialize};

use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::types::DocumentId;
use satsang_entity::audio_tree::{CreateAudioCategory, CreateAudioChapter, CreateAudioItem};
use satsang_entity::PublishStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Admin email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Initial publication status.
    pub status: PublishStatus,
    /// Optional cover image URL.
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl CreateCategoryRequest {
    /// Validate and convert into the entity create payload.
    pub fn into_create(self) -> AppResult<CreateAudioCategory> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)?;
        Ok(CreateAudioCategory {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            cover_image_url: self.cover_image_url,
        })
    }
}

/// Create chapter request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChapterRequest {
    /// Owning category id.
    pub category_id: DocumentId,
    /// Display title.
    pub title: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Advisory sort key.
    #[serde(default)]
    pub order: i64,
}

impl CreateChapterRequest {
    /// Validate and convert into the entity create payload.
    pub fn into_create(self) -> AppResult<CreateAudioChapter> {
        require_text("title", &self.title)?;
        Ok(CreateAudioChapter {
            category_id: self.category_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            order: self.order,
        })
    }
}

/// Create item request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Owning chapter id.
    pub chapter_id: DocumentId,
    /// Owning category id; must equal the chapter's.
    pub category_id: DocumentId,
    /// Display title.
    pub title: String,
    /// Associated script/transcript.
    #[serde(default)]
    pub text: String,
    /// Initial publication status.
    pub status: PublishStatus,
    /// Advisory sort key.
    #[serde(default)]
    pub order: i64,
}

impl CreateItemRequest {
    /// Validate and convert into the entity create payload.
    pub fn into_create(self) -> AppResult<CreateAudioItem> {
        require_text("title", &self.title)?;
        Ok(CreateAudioItem {
            chapter_id: self.chapter_id,
            category_id: self.category_id,
            title: self.title.trim().to_string(),
            text: self.text,
            status: self.status,
            order: self.order,
        })
    }
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_name_is_rejected() {
        let req = CreateCategoryRequest {
            name: "   ".into(),
            description: "Daily talks".into(),
            status: PublishStatus::Draft,
            cover_image_url: None,
        };
        let err = req.into_create().unwrap_err();
        assert_eq!(err.kind, satsang_core::error::ErrorKind::Validation);
    }

    #[test]
    fn create_payload_is_trimmed() {
        let req = CreateCategoryRequest {
            name: "  Morning Satsang  ".into(),
            description: " Daily talks ".into(),
            status: PublishStatus::Published,
            cover_image_url: None,
        };
        let payload = req.into_create().unwrap();
        assert_eq!(payload.name, "Morning Satsang");
        assert_eq!(payload.description, "Daily talks");
    }
}
