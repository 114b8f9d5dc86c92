//! Document store trait for pluggable remote persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::document::{Document, FieldPatch, ListQuery};
use crate::types::id::DocumentId;

/// Trait for remote document-store backends.
///
/// A backend exposes flat collections of JSON documents keyed by
/// generated string ids. The store offers no referential integrity and
/// no multi-document transactions; everything above this trait treats
/// each call as an independent write. Implementations exist for the
/// Firestore REST API and an in-memory store used in tests.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "firestore", "memory").
    fn provider_type(&self) -> &str;

    /// Insert a new document into a collection and return it as stored.
    async fn insert(&self, collection: &str, document: Document) -> AppResult<Document>;

    /// Fetch a document by id. `Ok(None)` when the id does not exist.
    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>>;

    /// List documents matching an equality-only query, in the
    /// collection's natural fetch order.
    async fn list(&self, collection: &str, query: &ListQuery) -> AppResult<Vec<Document>>;

    /// Merge a partial-field patch into an existing document and return
    /// the merged result. Fails with a not-found error when the id does
    /// not resolve; never creates on missing.
    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: FieldPatch,
    ) -> AppResult<Document>;

    /// Delete a document by id. Deleting an id that does not exist is a
    /// no-op, so concurrent overlapping deletes never surface errors.
    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()>;

    /// Count documents matching a query.
    async fn count(&self, collection: &str, query: &ListQuery) -> AppResult<usize> {
        Ok(self.list(collection, query).await?.len())
    }
}
