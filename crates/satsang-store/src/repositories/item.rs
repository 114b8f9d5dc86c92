//! Audio item repository.

use std::sync::Arc;

use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::{Document, DocumentId, ListQuery};
use satsang_entity::audio_tree::{AudioItem, AudioItemPatch, CreateAudioItem};

use crate::codec;

/// Repository for the item collection of the AI-audio tree.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    store: Arc<dyn DocumentStore>,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find an item by id.
    pub async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<AudioItem>> {
        match self.store.get(AudioItem::COLLECTION, id).await? {
            Some(doc) => codec::decode(doc).map(Some),
            None => Ok(None),
        }
    }

    /// List the items of a chapter, sorted by `order` ascending with
    /// stable ties.
    pub async fn find_by_chapter(&self, chapter_id: &DocumentId) -> AppResult<Vec<AudioItem>> {
        let query = ListQuery::field_eq("chapterId", chapter_id.as_str());
        let docs = self.store.list(AudioItem::COLLECTION, &query).await?;
        let mut items: Vec<AudioItem> = docs
            .into_iter()
            .map(codec::decode)
            .collect::<AppResult<_>>()?;
        items.sort_by_key(|i| i.order);
        Ok(items)
    }

    /// Create a new item record. The media reference starts empty.
    pub async fn create(&self, payload: &CreateAudioItem) -> AppResult<AudioItem> {
        let fields = codec::create_fields(payload)?;
        let stored = self
            .store
            .insert(AudioItem::COLLECTION, Document::new(fields))
            .await?;
        codec::decode(stored)
    }

    /// Merge a partial update into an existing item.
    pub async fn update(&self, id: &DocumentId, patch: &AudioItemPatch) -> AppResult<AudioItem> {
        let fields = codec::patch_fields(patch)?;
        let merged = self.store.update(AudioItem::COLLECTION, id, fields).await?;
        codec::decode(merged)
    }

    /// Delete an item record. Media cleanup is the caller's concern.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<()> {
        self.store.delete(AudioItem::COLLECTION, id).await
    }

    /// Count all items.
    pub async fn count(&self) -> AppResult<usize> {
        self.store
            .count(AudioItem::COLLECTION, &ListQuery::all())
            .await
    }
}
