//! Raw document shapes exchanged with the remote document store.
//!
//! Documents cross the store boundary as loosely-typed JSON field maps;
//! the repositories in `satsang-store` convert them to and from the
//! typed entities. Validation of required fields happens at that
//! boundary, not in consumers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::id::DocumentId;

/// The field map of a stored document.
pub type Fields = serde_json::Map<String, Value>;

/// A document as stored in (or destined for) a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The document's generated identifier.
    pub id: DocumentId,
    /// The document's fields.
    pub fields: Fields,
}

impl Document {
    /// Create a document with a freshly generated id.
    pub fn new(fields: Fields) -> Self {
        Self {
            id: DocumentId::generate(),
            fields,
        }
    }

    /// Create a document with an explicit id.
    pub fn with_id(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Borrow a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A partial-field update applied with merge semantics.
///
/// Fields present in the patch replace the stored values; fields absent
/// from the patch are left untouched. Setting a field to `Value::Null`
/// stores an explicit null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldPatch {
    /// The fields to merge into the stored document.
    pub fields: Fields,
}

impl FieldPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a patch from an existing field map.
    pub fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// Add a field to the patch.
    pub fn set(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A query over a collection: exact-match equality filters only.
///
/// The store supports equality filters on named fields and nothing
/// else; ordering and pagination happen client-side over the fetched
/// set so that no server-side composite indexes are ever required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Conjunction of `field == value` conditions. Empty means "all".
    pub equals: Vec<(String, Value)>,
}

impl ListQuery {
    /// Match every document in the collection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add an equality condition.
    pub fn with_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.equals.push((field.into(), value.into()));
        self
    }

    /// Shorthand for a single-condition query.
    pub fn field_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().with_eq(field, value)
    }

    /// Evaluate the query against a field map.
    pub fn matches(&self, fields: &Fields) -> bool {
        self.equals
            .iter()
            .all(|(field, value)| fields.get(field) == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        let doc = fields(json!({"name": "Morning"}));
        assert!(ListQuery::all().matches(&doc));
    }

    #[test]
    fn equality_conditions_are_conjunctive() {
        let doc = fields(json!({"categoryId": "c1", "status": "Draft"}));
        assert!(ListQuery::field_eq("categoryId", "c1").matches(&doc));
        assert!(ListQuery::field_eq("categoryId", "c1")
            .with_eq("status", "Draft")
            .matches(&doc));
        assert!(!ListQuery::field_eq("categoryId", "c1")
            .with_eq("status", "Published")
            .matches(&doc));
    }

    #[test]
    fn missing_field_never_matches() {
        let doc = fields(json!({"title": "Sunrise"}));
        assert!(!ListQuery::field_eq("chapterId", "ch1").matches(&doc));
    }
}
