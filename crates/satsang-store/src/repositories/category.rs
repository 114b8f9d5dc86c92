//! Audio category repository.

use std::sync::Arc;

use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::{Document, DocumentId, ListQuery};
use satsang_entity::audio_tree::{AudioCategory, AudioCategoryPatch, CreateAudioCategory};

use crate::codec;

/// Repository for the category collection of the AI-audio tree.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: Arc<dyn DocumentStore>,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a category by id.
    pub async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<AudioCategory>> {
        match self.store.get(AudioCategory::COLLECTION, id).await? {
            Some(doc) => codec::decode(doc).map(Some),
            None => Ok(None),
        }
    }

    /// List all categories, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<AudioCategory>> {
        let docs = self
            .store
            .list(AudioCategory::COLLECTION, &ListQuery::all())
            .await?;
        let mut categories: Vec<AudioCategory> = docs
            .into_iter()
            .map(codec::decode)
            .collect::<AppResult<_>>()?;
        categories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(categories)
    }

    /// Create a new category record.
    pub async fn create(&self, payload: &CreateAudioCategory) -> AppResult<AudioCategory> {
        let fields = codec::create_fields(payload)?;
        let stored = self
            .store
            .insert(AudioCategory::COLLECTION, Document::new(fields))
            .await?;
        codec::decode(stored)
    }

    /// Merge a partial update into an existing category.
    pub async fn update(
        &self,
        id: &DocumentId,
        patch: &AudioCategoryPatch,
    ) -> AppResult<AudioCategory> {
        let fields = codec::patch_fields(patch)?;
        let merged = self
            .store
            .update(AudioCategory::COLLECTION, id, fields)
            .await?;
        codec::decode(merged)
    }

    /// Delete a category record. The caller cascades children first.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<()> {
        self.store.delete(AudioCategory::COLLECTION, id).await
    }

    /// Count all categories.
    pub async fn count(&self) -> AppResult<usize> {
        self.store
            .count(AudioCategory::COLLECTION, &ListQuery::all())
            .await
    }
}
