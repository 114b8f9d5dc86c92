//! Firestore REST document store backend.
//!
//! Talks to the Firestore v1 REST API. Documents are translated between
//! plain JSON field maps and Firestore's typed `Value` wire shape.
//! Queries go through `:runQuery` with an AND of `EQUAL` field filters
//! and no `orderBy`, so no composite indexes are ever required; all
//! display ordering happens client-side in the repositories.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use satsang_core::config::store::StoreConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;
use satsang_core::types::{Document, DocumentId, FieldPatch, Fields, ListQuery};

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Firestore REST [`DocumentStore`] backend.
#[derive(Debug)]
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    /// `projects/{project}/databases/{database}/documents`
    root: String,
    auth_token: Option<String>,
}

impl FirestoreStore {
    /// Create a backend from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        if config.project_id.is_empty() {
            return Err(AppError::configuration(
                "store.project_id is required for the firestore provider",
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    satsang_core::error::ErrorKind::Configuration,
                    "Failed to build HTTP client",
                    e,
                )
            })?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let root = format!(
            "projects/{}/databases/{}/documents",
            config.project_id, config.database_id
        );
        Ok(Self {
            client,
            base_url,
            root,
            auth_token: config.auth_token.clone(),
        })
    }

    fn document_url(&self, collection: &str, id: &DocumentId) -> String {
        format!("{}/{}/{}/{}", self.base_url, self.root, collection, id)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        self.request(builder).send().await.map_err(|e| {
            AppError::with_source(
                satsang_core::error::ErrorKind::Persistence,
                "Document store request failed",
                e,
            )
        })
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn provider_type(&self) -> &str {
        "firestore"
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<Document> {
        let url = format!("{}/{}/{}", self.base_url, self.root, collection);
        let body = json!({ "fields": encode_fields(&document.fields) });
        let response = self
            .send(
                self.client
                    .post(&url)
                    .query(&[("documentId", document.id.as_str())])
                    .json(&body),
            )
            .await?;
        let payload = read_success(response).await?;
        decode_document(&payload)
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        let response = self
            .send(self.client.get(self.document_url(collection, id)))
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload = read_success(response).await?;
        decode_document(&payload).map(Some)
    }

    async fn list(&self, collection: &str, query: &ListQuery) -> AppResult<Vec<Document>> {
        let url = format!("{}/{}:runQuery", self.base_url, self.root);
        let body = json!({ "structuredQuery": build_query(collection, query) });
        let response = self.send(self.client.post(&url).json(&body)).await?;
        let payload = read_success(response).await?;

        let rows = payload
            .as_array()
            .ok_or_else(|| AppError::persistence("runQuery returned a non-array response"))?;
        let mut documents = Vec::new();
        for row in rows {
            // Rows without a `document` key carry read times / partial
            // progress and are skipped.
            if let Some(doc) = row.get("document") {
                documents.push(decode_document(doc)?);
            }
        }
        Ok(documents)
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: FieldPatch,
    ) -> AppResult<Document> {
        let mask: Vec<(&str, String)> = patch
            .fields
            .keys()
            .map(|field| ("updateMask.fieldPaths", field.clone()))
            .collect();
        let body = json!({ "fields": encode_fields(&patch.fields) });
        let response = self
            .send(
                self.client
                    .patch(self.document_url(collection, id))
                    .query(&[("currentDocument.exists", "true")])
                    .query(&mask)
                    .json(&body),
            )
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND
            || response.status() == reqwest::StatusCode::CONFLICT
        {
            return Err(AppError::not_found(format!(
                "Document '{id}' not found in '{collection}'"
            )));
        }
        let payload = read_success(response).await?;
        decode_document(&payload)
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()> {
        let response = self
            .send(self.client.delete(self.document_url(collection, id)))
            .await?;
        // Deleting a missing document is a no-op for Firestore as well;
        // tolerate 404 from emulators that do report it.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        read_success(response).await.map(|_| ())
    }
}

async fn read_success(response: reqwest::Response) -> AppResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::persistence(format!(
            "Document store returned {status}: {body}"
        )));
    }
    response.json().await.map_err(|e| {
        AppError::with_source(
            satsang_core::error::ErrorKind::Persistence,
            "Failed to read document store response",
            e,
        )
    })
}

fn build_query(collection: &str, query: &ListQuery) -> Value {
    let mut structured = json!({
        "from": [{ "collectionId": collection }]
    });
    if !query.equals.is_empty() {
        let filters: Vec<Value> = query
            .equals
            .iter()
            .map(|(field, value)| {
                json!({
                    "fieldFilter": {
                        "field": { "fieldPath": field },
                        "op": "EQUAL",
                        "value": encode_value(value),
                    }
                })
            })
            .collect();
        structured["where"] = if filters.len() == 1 {
            filters.into_iter().next().unwrap_or_default()
        } else {
            json!({ "compositeFilter": { "op": "AND", "filters": filters } })
        };
    }
    structured
}

/// Encode a plain JSON field map into Firestore wire fields.
fn encode_fields(fields: &Fields) -> Value {
    let encoded: Map<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect();
    Value::Object(encoded)
}

/// Encode a single JSON value into a Firestore typed value.
fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Firestore integers travel as strings.
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => {
            let fields: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), encode_value(v)))
                .collect();
            json!({ "mapValue": { "fields": fields } })
        }
    }
}

/// Decode a Firestore document resource into a [`Document`].
fn decode_document(resource: &Value) -> AppResult<Document> {
    let name = resource
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::persistence("Document resource missing 'name'"))?;
    let id = name
        .rsplit('/')
        .next()
        .ok_or_else(|| AppError::persistence("Document name has no id segment"))?;

    let mut fields = Fields::new();
    if let Some(Value::Object(wire)) = resource.get("fields") {
        for (key, value) in wire {
            fields.insert(key.clone(), decode_value(value)?);
        }
    }
    Ok(Document::with_id(DocumentId::new(id), fields))
}

/// Decode a Firestore typed value into plain JSON.
fn decode_value(value: &Value) -> AppResult<Value> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::persistence("Malformed Firestore value"))?;
    let (kind, inner) = object
        .iter()
        .next()
        .ok_or_else(|| AppError::persistence("Empty Firestore value"))?;
    Ok(match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => inner.clone(),
        "integerValue" => {
            let raw = inner
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| inner.to_string());
            let parsed: i64 = raw
                .parse()
                .map_err(|_| AppError::persistence(format!("Bad integerValue '{raw}'")))?;
            Value::from(parsed)
        }
        "doubleValue" => inner.clone(),
        "stringValue" | "timestampValue" | "referenceValue" => inner.clone(),
        "arrayValue" => {
            let items = inner
                .get("values")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            Value::Array(
                items
                    .iter()
                    .map(decode_value)
                    .collect::<AppResult<Vec<_>>>()?,
            )
        }
        "mapValue" => {
            let mut map = Map::new();
            if let Some(Value::Object(wire)) = inner.get("fields") {
                for (key, nested) in wire {
                    map.insert(key.clone(), decode_value(nested)?);
                }
            }
            Value::Object(map)
        }
        other => {
            return Err(AppError::persistence(format!(
                "Unsupported Firestore value kind '{other}'"
            )))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_scalars() {
        assert_eq!(encode_value(&json!("om")), json!({"stringValue": "om"}));
        assert_eq!(encode_value(&json!(7)), json!({"integerValue": "7"}));
        assert_eq!(encode_value(&json!(true)), json!({"booleanValue": true}));
        assert_eq!(encode_value(&Value::Null), json!({"nullValue": null}));
    }

    #[test]
    fn round_trips_nested_structures() {
        let original = json!({
            "title": "Morning",
            "order": 3,
            "tags": ["calm", "dawn"],
            "meta": { "speaker": "Guruji", "takes": 2 }
        });
        let encoded = encode_value(&original);
        let decoded = decode_value(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decodes_document_resource() {
        let resource = json!({
            "name": "projects/p/databases/(default)/documents/aiAudioChapters/ch1",
            "fields": {
                "title": { "stringValue": "Morning" },
                "order": { "integerValue": "2" }
            }
        });
        let doc = decode_document(&resource).unwrap();
        assert_eq!(doc.id.as_str(), "ch1");
        assert_eq!(doc.fields["title"], "Morning");
        assert_eq!(doc.fields["order"], 2);
    }

    #[test]
    fn single_filter_skips_composite() {
        let query = ListQuery::field_eq("categoryId", "cat1");
        let structured = build_query("aiAudioChapters", &query);
        assert!(structured["where"]["fieldFilter"].is_object());

        let query = query.with_eq("status", "Draft");
        let structured = build_query("aiAudioChapters", &query);
        assert_eq!(
            structured["where"]["compositeFilter"]["filters"]
                .as_array()
                .unwrap()
                .len(),
            2
        );
    }
}
