//! In-memory media resolver for tests and local development.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use satsang_core::result::AppResult;
use satsang_core::traits::{MediaResolver, MediaUpload};

/// An in-memory [`MediaResolver`] keyed by generated URL.
#[derive(Debug, Default, Clone)]
pub struct MemoryResolver {
    assets: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an asset is currently stored under this URL.
    pub async fn contains(&self, url: &str) -> bool {
        self.assets.read().await.contains_key(url)
    }

    /// Number of stored assets.
    pub async fn len(&self) -> usize {
        self.assets.read().await.len()
    }

    /// Whether no assets are stored.
    pub async fn is_empty(&self) -> bool {
        self.assets.read().await.is_empty()
    }
}

#[async_trait]
impl MediaResolver for MemoryResolver {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn upload(&self, data: Bytes, file_name: &str, folder: &str) -> AppResult<MediaUpload> {
        let size_bytes = data.len() as u64;
        let url = format!(
            "memory://{folder}/{}/{file_name}",
            satsang_core::types::DocumentId::generate()
        );
        self.assets.write().await.insert(url.clone(), data);
        Ok(MediaUpload {
            url,
            file_name: file_name.to_string(),
            size_bytes,
        })
    }

    async fn delete_by_url(&self, url: &str) -> AppResult<()> {
        // Removing an unknown URL is a no-op, matching the CDN contract.
        self.assets.write().await.remove(url);
        Ok(())
    }
}
