//! Audio chapter repository.

use std::sync::Arc;

use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::{Document, DocumentId, ListQuery};
use satsang_entity::audio_tree::{AudioChapter, AudioChapterPatch, CreateAudioChapter};

use crate::codec;

/// Repository for the chapter collection of the AI-audio tree.
#[derive(Debug, Clone)]
pub struct ChapterRepository {
    store: Arc<dyn DocumentStore>,
}

impl ChapterRepository {
    /// Create a new chapter repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find a chapter by id.
    pub async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<AudioChapter>> {
        match self.store.get(AudioChapter::COLLECTION, id).await? {
            Some(doc) => codec::decode(doc).map(Some),
            None => Ok(None),
        }
    }

    /// List the chapters of a category, sorted by `order` ascending.
    ///
    /// The sort is stable, so equal `order` values keep the store's
    /// natural fetch order.
    pub async fn find_by_category(&self, category_id: &DocumentId) -> AppResult<Vec<AudioChapter>> {
        let query = ListQuery::field_eq("categoryId", category_id.as_str());
        let docs = self.store.list(AudioChapter::COLLECTION, &query).await?;
        let mut chapters: Vec<AudioChapter> = docs
            .into_iter()
            .map(codec::decode)
            .collect::<AppResult<_>>()?;
        chapters.sort_by_key(|c| c.order);
        Ok(chapters)
    }

    /// Create a new chapter record.
    pub async fn create(&self, payload: &CreateAudioChapter) -> AppResult<AudioChapter> {
        let fields = codec::create_fields(payload)?;
        let stored = self
            .store
            .insert(AudioChapter::COLLECTION, Document::new(fields))
            .await?;
        codec::decode(stored)
    }

    /// Merge a partial update into an existing chapter.
    ///
    /// [`AudioChapterPatch`] cannot express `categoryId`, so the owning
    /// reference is immutable by construction.
    pub async fn update(
        &self,
        id: &DocumentId,
        patch: &AudioChapterPatch,
    ) -> AppResult<AudioChapter> {
        let fields = codec::patch_fields(patch)?;
        let merged = self
            .store
            .update(AudioChapter::COLLECTION, id, fields)
            .await?;
        codec::decode(merged)
    }

    /// Delete a chapter record. The caller cascades items first.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<()> {
        self.store.delete(AudioChapter::COLLECTION, id).await
    }

    /// Count all chapters.
    pub async fn count(&self) -> AppResult<usize> {
        self.store
            .count(AudioChapter::COLLECTION, &ListQuery::all())
            .await
    }
}
