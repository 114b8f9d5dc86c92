//! Bhajan (devotional audio) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use satsang_core::types::DocumentId;

use crate::persisted::Persisted;
use crate::status::PublishStatus;

/// A bhajan recording in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bhajan {
    /// Unique bhajan identifier.
    pub id: DocumentId,
    /// Display title.
    pub title: String,
    /// Performing artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Lyrics text.
    pub lyrics: String,
    /// Display name of the audio file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    /// Durable URL of the audio asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Display duration string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Publication status.
    pub status: PublishStatus,
    /// When the bhajan was created.
    pub created_at: DateTime<Utc>,
    /// When the bhajan was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new bhajan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBhajan {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub status: PublishStatus,
}

/// Partial update for a bhajan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BhajanPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PublishStatus>,
}

impl Persisted for Bhajan {
    const COLLECTION: &'static str = "bhajans";
    type Create = CreateBhajan;
    type Patch = BhajanPatch;

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
        self.audio_url.as_deref()
    }
}
