//! Conversion between typed entities and raw store documents.
//!
//! Entities serialize with their `id` inline; documents keep the id
//! outside the field map. These helpers move the id across that gap and
//! surface any shape mismatch as a `Serialization` error at the store
//! boundary, so consumers never see half-valid records.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::types::{Document, FieldPatch, Fields};

/// Serialize a creation payload into a field map, stamping both
/// timestamps with "now".
pub fn create_fields<T: Serialize>(payload: &T) -> AppResult<Fields> {
    let mut fields = to_object(payload)?;
    let now = serde_json::to_value(Utc::now())?;
    fields.insert("createdAt".to_string(), now.clone());
    fields.insert("updatedAt".to_string(), now);
    fields.remove("id");
    Ok(fields)
}

/// Serialize a partial-update payload into a merge patch, refreshing
/// `updatedAt`.
pub fn patch_fields<T: Serialize>(payload: &T) -> AppResult<FieldPatch> {
    let mut fields = to_object(payload)?;
    fields.insert("updatedAt".to_string(), serde_json::to_value(Utc::now())?);
    fields.remove("id");
    Ok(FieldPatch::from_fields(fields))
}

/// Deserialize a stored document into a typed entity, injecting the id.
pub fn decode<T: DeserializeOwned>(document: Document) -> AppResult<T> {
    let Document { id, mut fields } = document;
    fields.insert("id".to_string(), Value::String(id.into_string()));
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        AppError::with_source(
            satsang_core::error::ErrorKind::Serialization,
            "Stored document does not match the expected entity shape",
            e,
        )
    })
}

fn to_object<T: Serialize>(payload: &T) -> AppResult<Fields> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::serialization(format!(
            "Expected an object payload, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satsang_core::types::DocumentId;
    use satsang_entity::audio_tree::{AudioChapter, CreateAudioChapter};

    #[test]
    fn create_fields_stamps_timestamps_and_drops_id() {
        let payload = CreateAudioChapter {
            category_id: DocumentId::new("cat1"),
            title: "Morning".into(),
            description: "".into(),
            order: 1,
        };
        let fields = create_fields(&payload).unwrap();
        assert!(fields.contains_key("createdAt"));
        assert!(fields.contains_key("updatedAt"));
        assert!(!fields.contains_key("id"));
        assert_eq!(fields["categoryId"], "cat1");
    }

    #[test]
    fn decode_injects_document_id() {
        let payload = CreateAudioChapter {
            category_id: DocumentId::new("cat1"),
            title: "Morning".into(),
            description: "".into(),
            order: 2,
        };
        let doc = Document::with_id(DocumentId::new("ch1"), create_fields(&payload).unwrap());
        let chapter: AudioChapter = decode(doc).unwrap();
        assert_eq!(chapter.id.as_str(), "ch1");
        assert_eq!(chapter.order, 2);
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let mut fields = Fields::new();
        fields.insert("title".to_string(), Value::Bool(true));
        let doc = Document::with_id(DocumentId::new("ch1"), fields);
        let err = decode::<AudioChapter>(doc).unwrap_err();
        assert_eq!(err.kind, satsang_core::error::ErrorKind::Serialization);
    }
}
