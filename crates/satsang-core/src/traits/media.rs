//! Media resolver trait for externally hosted binary assets.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// The durable result of uploading a media file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUpload {
    /// Durable delivery URL for the uploaded asset.
    pub url: String,
    /// The original file name, kept for display.
    pub file_name: String,
    /// Size of the uploaded payload in bytes.
    pub size_bytes: u64,
}

/// Trait for media CDN backends.
///
/// Resolves a local file into a durable URL (upload) and reverses a
/// durable URL into a deletable handle (delete-by-url). Record deletes
/// treat `delete_by_url` as best-effort: a failure here is logged by
/// the caller and never blocks removal of the owning record.
#[async_trait]
pub trait MediaResolver: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "cloudinary", "memory").
    fn provider_type(&self) -> &str;

    /// Upload a file and return its durable URL.
    ///
    /// `folder` is a destination hint within the CDN account (e.g.
    /// `"ai-audio"`); backends may ignore it.
    async fn upload(&self, data: Bytes, file_name: &str, folder: &str) -> AppResult<MediaUpload>;

    /// Delete the asset a durable URL points at.
    ///
    /// Idempotent: deleting a non-existent or already-deleted asset
    /// succeeds.
    async fn delete_by_url(&self, url: &str) -> AppResult<()>;
}
