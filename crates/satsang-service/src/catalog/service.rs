//! Generic CRUD service for flat catalog collections.
//!
//! Books, bhajans, wallpapers, events, slides, and admin users share
//! one shape: list newest-first with client-side pagination and an
//! optional case-insensitive name filter, plus create/update/delete
//! with merge semantics. Deleting a record that references a media
//! asset best-effort deletes the asset, same policy as audio items.

use std::sync::Arc;

use tracing::{info, warn};

use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::MediaResolver;
use satsang_core::types::{DocumentId, PageRequest, PageResponse};
use satsang_entity::Persisted;
use satsang_store::repositories::CatalogRepository;

/// CRUD service over one catalog collection.
#[derive(Debug, Clone)]
pub struct CatalogService<T: Persisted> {
    repo: Arc<CatalogRepository<T>>,
    media: Arc<dyn MediaResolver>,
}

impl<T: Persisted> CatalogService<T> {
    /// Create a new catalog service.
    pub fn new(repo: Arc<CatalogRepository<T>>, media: Arc<dyn MediaResolver>) -> Self {
        Self { repo, media }
    }

    /// List records newest-first, filtered and paged client-side.
    ///
    /// Filtering happens over the already-fetched set: the store only
    /// supports equality queries, and these collections are small
    /// enough that fetching them whole is the simpler contract.
    pub async fn list(
        &self,
        page: &PageRequest,
        search: Option<&str>,
    ) -> AppResult<PageResponse<T>> {
        let mut records = self.repo.find_all().await?;
        if let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            records.retain(|r| r.display_label().to_lowercase().contains(&needle));
        }
        Ok(PageResponse::paginate(records, page))
    }

    /// Fetch a record by id.
    pub async fn get(&self, id: &DocumentId) -> AppResult<T> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(format!("Record '{id}' not found in {}", T::COLLECTION))
        })
    }

    /// Create a new record.
    pub async fn create(&self, payload: T::Create) -> AppResult<T> {
        let record = self.repo.create(&payload).await?;
        info!(collection = T::COLLECTION, id = %record.id(), "Record created");
        Ok(record)
    }

    /// Merge a partial update into an existing record.
    pub async fn update(&self, id: &DocumentId, patch: T::Patch) -> AppResult<T> {
        let record = self.repo.update(id, &patch).await?;
        info!(collection = T::COLLECTION, %id, "Record updated");
        Ok(record)
    }

    /// Delete a record, best-effort deleting its media asset first.
    /// Deleting an id that no longer exists is a no-op.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<()> {
        if let Some(record) = self.repo.find_by_id(id).await? {
            if let Some(url) = record.media_url() {
                if let Err(e) = self.media.delete_by_url(url).await {
                    warn!(
                        collection = T::COLLECTION,
                        %id,
                        %url,
                        error = %e,
                        "Media delete failed, keeping record delete"
                    );
                }
            }
        }
        self.repo.delete(id).await?;
        info!(collection = T::COLLECTION, %id, "Record deleted");
        Ok(())
    }
}
