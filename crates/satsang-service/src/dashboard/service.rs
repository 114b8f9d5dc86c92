//! Collection counts for the admin dashboard.

use std::sync::Arc;

use serde::Serialize;

use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::ListQuery;
use satsang_entity::audio_tree::{AudioCategory, AudioChapter, AudioItem};
use satsang_entity::bhajan::Bhajan;
use satsang_entity::book::Book;
use satsang_entity::event::CalendarEvent;
use satsang_entity::slide::PromoSlide;
use satsang_entity::user::AdminUser;
use satsang_entity::wallpaper::Wallpaper;
use satsang_entity::Persisted;

/// Record counts across every managed collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub audio_categories: usize,
    pub audio_chapters: usize,
    pub audio_items: usize,
    pub books: usize,
    pub bhajans: usize,
    pub wallpapers: usize,
    pub events: usize,
    pub slides: usize,
    pub admin_users: usize,
}

/// Aggregates per-collection counts straight off the store.
#[derive(Debug, Clone)]
pub struct DashboardService {
    store: Arc<dyn DocumentStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Count every collection. Counts run sequentially against the
    /// store; the dashboard is an occasional admin view, not a hot
    /// path.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        Ok(DashboardSummary {
            audio_categories: self.count(AudioCategory::COLLECTION).await?,
            audio_chapters: self.count(AudioChapter::COLLECTION).await?,
            audio_items: self.count(AudioItem::COLLECTION).await?,
            books: self.count(<Book as Persisted>::COLLECTION).await?,
            bhajans: self.count(<Bhajan as Persisted>::COLLECTION).await?,
            wallpapers: self.count(<Wallpaper as Persisted>::COLLECTION).await?,
            events: self.count(<CalendarEvent as Persisted>::COLLECTION).await?,
            slides: self.count(<PromoSlide as Persisted>::COLLECTION).await?,
            admin_users: self.count(<AdminUser as Persisted>::COLLECTION).await?,
        })
    }

    async fn count(&self, collection: &str) -> AppResult<usize> {
        self.store.count(collection, &ListQuery::all()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satsang_core::types::{Document, Fields};
    use satsang_store::providers::MemoryStore;

    fn doc(label: &str) -> Document {
        let mut fields = Fields::new();
        fields.insert("name".into(), serde_json::Value::String(label.into()));
        Document::new(fields)
    }

    #[tokio::test]
    async fn counts_each_collection_independently() {
        let store = MemoryStore::new();
        store
            .insert(AudioCategory::COLLECTION, doc("Bhajan Sandhya"))
            .await
            .unwrap();
        store
            .insert(AudioCategory::COLLECTION, doc("Pravachan"))
            .await
            .unwrap();
        store
            .insert(<Book as Persisted>::COLLECTION, doc("Amrit Vachan"))
            .await
            .unwrap();

        let service = DashboardService::new(Arc::new(store));
        let summary = service.summary().await.unwrap();
        assert_eq!(summary.audio_categories, 2);
        assert_eq!(summary.books, 1);
        assert_eq!(summary.bhajans, 0);
        assert_eq!(summary.admin_users, 0);
    }
}
