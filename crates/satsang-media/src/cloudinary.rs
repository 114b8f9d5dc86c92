//! Cloudinary media resolver.
//!
//! Uploads go through the unsigned upload endpoint with a preset;
//! deletes go through the admin API with basic auth. Deleting an asset
//! that is already gone reports success, which keeps record deletes
//! retryable.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use satsang_core::config::media::MediaConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::{MediaResolver, MediaUpload};

const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary [`MediaResolver`] backend.
#[derive(Debug)]
pub struct CloudinaryResolver {
    client: reqwest::Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    upload_preset: String,
}

impl CloudinaryResolver {
    /// Create a resolver from configuration.
    pub fn new(config: &MediaConfig) -> AppResult<Self> {
        if config.cloud_name.is_empty() {
            return Err(AppError::configuration(
                "media.cloud_name is required for the cloudinary provider",
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            upload_preset: config.upload_preset.clone(),
        })
    }
}

#[async_trait]
impl MediaResolver for CloudinaryResolver {
    fn provider_type(&self) -> &str {
        "cloudinary"
    }

    async fn upload(&self, data: Bytes, file_name: &str, folder: &str) -> AppResult<MediaUpload> {
        let size_bytes = data.len() as u64;
        let url = format!("{}/{}/auto/upload", self.base_url, self.cloud_name);
        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    satsang_core::error::ErrorKind::ExternalService,
                    "Media upload request failed",
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Media upload returned {status}: {body}"
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            AppError::with_source(
                satsang_core::error::ErrorKind::ExternalService,
                "Failed to read media upload response",
                e,
            )
        })?;
        let secure_url = payload
            .get("secure_url")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::external_service("Upload response missing secure_url"))?;

        Ok(MediaUpload {
            url: secure_url.to_string(),
            file_name: file_name.to_string(),
            size_bytes,
        })
    }

    async fn delete_by_url(&self, url: &str) -> AppResult<()> {
        let asset = match AssetRef::parse(url) {
            Some(asset) => asset,
            // A URL we cannot map to an asset is treated as already
            // gone rather than surfaced as an error.
            None => {
                tracing::warn!(%url, "Could not derive a public id from media URL, skipping");
                return Ok(());
            }
        };

        let endpoint = format!(
            "{}/{}/resources/{}/upload",
            self.base_url, self.cloud_name, asset.resource_type
        );
        let response = self
            .client
            .delete(&endpoint)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .query(&[("public_ids[]", asset.public_id.as_str())])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    satsang_core::error::ErrorKind::ExternalService,
                    "Media delete request failed",
                    e,
                )
            })?;

        let status = response.status();
        // Idempotency: a missing asset is success, both as 404 and as a
        // per-id "not_found" marker in a 200 body.
        if status == reqwest::StatusCode::NOT_FOUND || status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::external_service(format!(
            "Media delete returned {status}: {body}"
        )))
    }
}

/// A deletable handle derived from a delivery URL.
#[derive(Debug, PartialEq, Eq)]
struct AssetRef {
    /// Cloudinary resource type segment (`image`, `video`, `raw`).
    resource_type: String,
    /// Public id, including the folder path.
    public_id: String,
}

impl AssetRef {
    /// Parse a delivery URL of the shape
    /// `https://res.cloudinary.com/{cloud}/{type}/upload/v{n}/{folder}/{name}.{ext}`.
    fn parse(url: &str) -> Option<Self> {
        let (prefix, rest) = url.split_once("/upload/")?;
        let resource_type = prefix.rsplit('/').next()?.to_string();

        // Drop the optional version segment.
        let rest = match rest.split_once('/') {
            Some((first, tail))
                if first.len() > 1
                    && first.starts_with('v')
                    && first[1..].chars().all(|c| c.is_ascii_digit()) =>
            {
                tail
            }
            _ => rest,
        };
        if rest.is_empty() {
            return None;
        }

        // Strip the file extension from the last segment only.
        let public_id = match rest.rsplit_once('.') {
            Some((stem, ext)) if !ext.contains('/') => stem.to_string(),
            _ => rest.to_string(),
        };
        Some(Self {
            resource_type,
            public_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_versioned_audio_url() {
        let asset = AssetRef::parse(
            "https://res.cloudinary.com/demo/video/upload/v1712/ai-audio/sunrise.mp3",
        )
        .unwrap();
        assert_eq!(asset.resource_type, "video");
        assert_eq!(asset.public_id, "ai-audio/sunrise");
    }

    #[test]
    fn parses_unversioned_image_url() {
        let asset =
            AssetRef::parse("https://res.cloudinary.com/demo/image/upload/wallpapers/lotus.jpg")
                .unwrap();
        assert_eq!(asset.resource_type, "image");
        assert_eq!(asset.public_id, "wallpapers/lotus");
    }

    #[test]
    fn rejects_foreign_urls() {
        assert_eq!(AssetRef::parse("https://example.com/file.mp3"), None);
        assert_eq!(
            AssetRef::parse("https://res.cloudinary.com/demo/video/upload/"),
            None
        );
    }
}
