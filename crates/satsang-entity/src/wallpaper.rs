//! Wallpaper entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use satsang_core::types::DocumentId;

use crate::persisted::Persisted;
use crate::status::PublishStatus;

/// A downloadable wallpaper in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallpaper {
    /// Unique wallpaper identifier.
    pub id: DocumentId,
    /// Display title.
    pub title: String,
    /// Durable URL of the image asset.
    pub image_url: String,
    /// Publication status.
    pub status: PublishStatus,
    /// When the wallpaper was created.
    pub created_at: DateTime<Utc>,
    /// When the wallpaper was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new wallpaper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWallpaper {
    pub title: String,
    pub image_url: String,
    pub status: PublishStatus,
}

/// Partial update for a wallpaper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl Persisted for Wallpaper {
    const COLLECTION: &'static str = "wallpapers";
    type Create = CreateWallpaper;
    type Patch = WallpaperPatch;

    fn id(&self) -> &DocumentId {
        &self.id
    }

    fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    fn display_label(&self) -> &str {
        &self.title
    }

    fn media_url(&self) -> Option<&str> {
        Some(&self.image_url)
    }
}
