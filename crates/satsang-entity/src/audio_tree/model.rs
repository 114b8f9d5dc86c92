//! AI-audio tree entity models.
//!
//! Three flat collections form a strict three-level tree: categories own
//! chapters (via `AudioChapter::category_id`), chapters own items (via
//! `AudioItem::chapter_id`). The store enforces none of this; the
//! service layer maintains referential integrity, including cascading
//! deletes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use satsang_core::types::DocumentId;

use crate::persisted::lenient_order;
use crate::status::PublishStatus;

/// Top-level grouping node of the AI-audio content tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCategory {
    /// Unique category identifier.
    pub id: DocumentId,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Publication status, independent of child statuses.
    pub status: PublishStatus,
    /// Optional cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AudioCategory {
    /// Collection holding category documents.
    pub const COLLECTION: &'static str = "aiAudioCategories";
}

/// Mid-level node owned by exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioChapter {
    /// Unique chapter identifier.
    pub id: DocumentId,
    /// Owning category. Immutable after creation.
    pub category_id: DocumentId,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Advisory sort key; not unique, ties keep fetch order.
    #[serde(
        default = "lenient_order::default",
        deserialize_with = "lenient_order::deserialize"
    )]
    pub order: i64,
    /// When the chapter was created.
    pub created_at: DateTime<Utc>,
    /// When the chapter was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AudioChapter {
    /// Collection holding chapter documents.
    pub const COLLECTION: &'static str = "aiAudioChapters";
}

/// Leaf content node owned by exactly one chapter.
///
/// `category_id` duplicates the owning chapter's category so items can
/// be queried per category with a single equality filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItem {
    /// Unique item identifier.
    pub id: DocumentId,
    /// Owning chapter.
    pub chapter_id: DocumentId,
    /// Denormalized owning category (equals the chapter's).
    pub category_id: DocumentId,
    /// Display title.
    pub title: String,
    /// Associated script/transcript. Unbounded length.
    pub text: String,
    /// Display name of the referenced audio file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    /// Durable URL of the referenced audio asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Display duration string (e.g., "4:32").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Publication status.
    pub status: PublishStatus,
    /// Advisory sort key; not unique, ties keep fetch order.
    #[serde(
        default = "lenient_order::default",
        deserialize_with = "lenient_order::deserialize"
    )]
    pub order: i64,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

impl AudioItem {
    /// Collection holding item documents.
    pub const COLLECTION: &'static str = "aiAudioItems";

    /// Whether the item references an uploaded audio asset.
    pub fn has_media(&self) -> bool {
        self.audio_url.is_some()
    }
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAudioCategory {
    /// Display name. Non-empty after trimming.
    pub name: String,
    /// Display description. Non-empty after trimming.
    pub description: String,
    /// Initial publication status.
    pub status: PublishStatus,
    /// Optional cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

/// Data required to create a new chapter under a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAudioChapter {
    /// Owning category.
    pub category_id: DocumentId,
    /// Display title.
    pub title: String,
    /// Display description.
    pub description: String,
    /// Advisory sort key.
    pub order: i64,
}

/// Data required to create a new item under a chapter.
///
/// The media reference starts empty; audio is attached afterwards via
/// [`AudioItemPatch`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAudioItem {
    /// Owning chapter.
    pub chapter_id: DocumentId,
    /// Owning category; must equal the chapter's.
    pub category_id: DocumentId,
    /// Display title.
    pub title: String,
    /// Associated script/transcript.
    pub text: String,
    /// Initial publication status.
    pub status: PublishStatus,
    /// Advisory sort key.
    pub order: i64,
}

/// Partial update for a category. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCategoryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

/// Partial update for a chapter. `category_id` is deliberately not
/// representable here: the owning reference never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioChapterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Partial update for an item. The media pair can be attached or
/// replaced independently of every other field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}
