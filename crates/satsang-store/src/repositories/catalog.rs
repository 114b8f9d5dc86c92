//! Generic repository for flat catalog collections.
//!
//! Books, bhajans, wallpapers, events, slides, and admin users all
//! follow the same CRUD shape with no nesting; one generic repository
//! over [`Persisted`] covers them all.

use std::marker::PhantomData;
use std::sync::Arc;

use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::{Document, DocumentId, ListQuery};
use satsang_entity::Persisted;

use crate::codec;

/// Repository for a flat catalog collection.
#[derive(Debug, Clone)]
pub struct CatalogRepository<T: Persisted> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Persisted> CatalogRepository<T> {
    /// Create a new repository for `T`'s collection.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Find a record by id.
    pub async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<T>> {
        match self.store.get(T::COLLECTION, id).await? {
            Some(doc) => codec::decode(doc).map(Some),
            None => Ok(None),
        }
    }

    /// List all records, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        let docs = self.store.list(T::COLLECTION, &ListQuery::all()).await?;
        let mut records: Vec<T> = docs
            .into_iter()
            .map(codec::decode)
            .collect::<AppResult<_>>()?;
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(records)
    }

    /// Create a new record.
    pub async fn create(&self, payload: &T::Create) -> AppResult<T> {
        let fields = codec::create_fields(payload)?;
        let stored = self.store.insert(T::COLLECTION, Document::new(fields)).await?;
        codec::decode(stored)
    }

    /// Merge a partial update into an existing record.
    pub async fn update(&self, id: &DocumentId, patch: &T::Patch) -> AppResult<T> {
        let fields = codec::patch_fields(patch)?;
        let merged = self.store.update(T::COLLECTION, id, fields).await?;
        codec::decode(merged)
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<()> {
        self.store.delete(T::COLLECTION, id).await
    }

    /// Count all records in the collection.
    pub async fn count(&self) -> AppResult<usize> {
        self.store.count(T::COLLECTION, &ListQuery::all()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MemoryStore;
    use satsang_entity::wallpaper::{CreateWallpaper, Wallpaper, WallpaperPatch};
    use satsang_entity::PublishStatus;

    fn repo() -> CatalogRepository<Wallpaper> {
        CatalogRepository::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_then_update_merges() {
        let repo = repo();
        let created = repo
            .create(&CreateWallpaper {
                title: "Lotus".into(),
                image_url: "https://cdn.example/lotus.jpg".into(),
                status: PublishStatus::Draft,
            })
            .await
            .unwrap();

        let patch = WallpaperPatch {
            status: Some(PublishStatus::Published),
            ..Default::default()
        };
        let updated = repo.update(&created.id, &patch).await.unwrap();
        assert_eq!(updated.title, "Lotus");
        assert_eq!(updated.status, PublishStatus::Published);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let repo = repo();
        for title in ["first", "second"] {
            repo.create(&CreateWallpaper {
                title: title.into(),
                image_url: format!("https://cdn.example/{title}.jpg"),
                status: PublishStatus::Draft,
            })
            .await
            .unwrap();
            // Distinct creation instants for a deterministic sort.
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].title, "second");
        assert_eq!(all[1].title, "first");
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let repo = repo();
        let err = repo
            .update(&DocumentId::new("ghost"), &WallpaperPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
