//! The [`Persisted`] trait connecting entities to their collections.
//!
//! Each flat catalog entity nominates its collection name, a creation
//! payload, and a partial-update payload. The generic repository in
//! `satsang-store` is written against this trait so the simpler CRUD
//! collections do not each need a hand-written repository.

use serde::de::DeserializeOwned;
use serde::Serialize;

use satsang_core::types::DocumentId;

/// A document-store entity tied to a named collection.
pub trait Persisted: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The flat collection this entity lives in.
    const COLLECTION: &'static str;

    /// Payload accepted when creating a new record. The repository adds
    /// the generated id and both timestamps.
    type Create: Serialize + Send + Sync;

    /// Partial-update payload, merged into the stored record. Absent
    /// fields must serialize to nothing (`skip_serializing_if`).
    type Patch: Serialize + Send + Sync;

    /// The record's identifier.
    fn id(&self) -> &DocumentId;

    /// When the record was created; list views sort newest-first.
    fn created_at(&self) -> chrono::DateTime<chrono::Utc>;

    /// Human-readable label used for client-side name filtering.
    fn display_label(&self) -> &str;

    /// The durable media URL this record references, if any. Deleting
    /// the record best-effort deletes this asset.
    fn media_url(&self) -> Option<&str> {
        None
    }
}

/// Serde helper for advisory `order` fields.
///
/// Stored documents sometimes carry `order` as a string or not at all;
/// anything that is not a number deserializes as 0 so display sorting
/// never fails on legacy data.
pub mod lenient_order {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        })
    }

    pub fn default() -> i64 {
        0
    }
}
