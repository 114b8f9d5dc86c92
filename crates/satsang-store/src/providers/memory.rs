//! In-memory document store.
//!
//! Backs tests and local development. Collections are plain vectors so
//! natural fetch order is insertion order, matching the tie-break the
//! display sorting relies on.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::{Document, DocumentId, FieldPatch, ListQuery};

/// An in-memory [`DocumentStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<Document> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        if docs.iter().any(|d| d.id == document.id) {
            return Err(AppError::conflict(format!(
                "Document '{}' already exists in '{collection}'",
                document.id
            )));
        }
        docs.push(document.clone());
        Ok(document)
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| &d.id == id).cloned()))
    }

    async fn list(&self, collection: &str, query: &ListQuery) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| query.matches(&d.fields))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: FieldPatch,
    ) -> AppResult<Document> {
        let mut collections = self.collections.write().await;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;
        let doc = docs
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or_else(|| not_found(collection, id))?;
        for (field, value) in patch.fields {
            doc.fields.insert(field, value);
        }
        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|d| &d.id != id);
        }
        Ok(())
    }
}

fn not_found(collection: &str, id: &DocumentId) -> AppError {
    AppError::not_found(format!("Document '{id}' not found in '{collection}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, fields: serde_json::Value) -> Document {
        match fields {
            serde_json::Value::Object(map) => Document::with_id(DocumentId::new(id), map),
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = MemoryStore::new();
        store
            .insert("chapters", doc("ch1", json!({"title": "Morning"})))
            .await
            .unwrap();
        let fetched = store
            .get("chapters", &DocumentId::new("ch1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.fields["title"], "Morning");
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for id in ["a", "b", "c"] {
            store
                .insert("items", doc(id, json!({"chapterId": "ch1"})))
                .await
                .unwrap();
        }
        let docs = store
            .list("items", &ListQuery::field_eq("chapterId", "ch1"))
            .await
            .unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_merges_without_replacing() {
        let store = MemoryStore::new();
        store
            .insert("items", doc("it1", json!({"title": "Sunrise", "text": "Om"})))
            .await
            .unwrap();
        let patch = FieldPatch::new().set("text", json!("Om shanti"));
        let merged = store
            .update("items", &DocumentId::new("it1"), patch)
            .await
            .unwrap();
        assert_eq!(merged.fields["title"], "Sunrise");
        assert_eq!(merged.fields["text"], "Om shanti");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update("items", &DocumentId::new("ghost"), FieldPatch::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store
            .insert("items", doc("it1", json!({"title": "Sunrise"})))
            .await
            .unwrap();
        let id = DocumentId::new("it1");
        store.delete("items", &id).await.unwrap();
        // Second delete of the same id is a no-op, not an error.
        store.delete("items", &id).await.unwrap();
        assert!(store.get("items", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_conflicts() {
        let store = MemoryStore::new();
        store
            .insert("items", doc("it1", json!({})))
            .await
            .unwrap();
        let err = store
            .insert("items", doc("it1", json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.kind, satsang_core::error::ErrorKind::Conflict);
    }
}
