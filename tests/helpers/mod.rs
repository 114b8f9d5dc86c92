//! Shared test helpers for integration tests.

// Not every test target uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use bytes::Bytes;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use satsang_core::config::AppConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::{DocumentStore, MediaResolver, MediaUpload};
use satsang_core::types::{Document, DocumentId, FieldPatch, ListQuery};
use satsang_media::MemoryResolver;
use satsang_store::providers::MemoryStore;

pub const TEST_EMAIL: &str = "admin@satsang.app";
pub const TEST_PASSWORD: &str = "lotus108";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state for direct service access
    pub state: satsang_api::AppState,
}

impl TestApp {
    /// Create a new test application backed by in-memory providers.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.static_credentials =
            HashMap::from([(TEST_EMAIL.to_string(), TEST_PASSWORD.to_string())]);

        let state = satsang_api::build_state(config).expect("Failed to build state");
        let router = satsang_api::build_app(state.clone());

        Self { router, state }
    }

    /// Login and return the session token.
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": TEST_EMAIL,
                    "password": TEST_PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A store wrapper that fails every operation on one collection while
/// the fault is armed, for exercising partial-failure behavior.
#[derive(Debug)]
pub struct FlakyStore {
    inner: MemoryStore,
    failing: RwLock<Option<String>>,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::new(),
            failing: RwLock::new(None),
        })
    }

    /// Arm the fault: operations on `collection` start failing.
    pub async fn fail_collection(&self, collection: &str) {
        *self.failing.write().await = Some(collection.to_string());
    }

    /// Disarm the fault.
    pub async fn heal(&self) {
        *self.failing.write().await = None;
    }

    async fn check(&self, collection: &str) -> AppResult<()> {
        if self.failing.read().await.as_deref() == Some(collection) {
            return Err(AppError::persistence(format!(
                "Injected failure for collection '{collection}'"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    fn provider_type(&self) -> &str {
        "flaky"
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<Document> {
        self.check(collection).await?;
        self.inner.insert(collection, document).await
    }

    async fn get(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        self.check(collection).await?;
        self.inner.get(collection, id).await
    }

    async fn list(&self, collection: &str, query: &ListQuery) -> AppResult<Vec<Document>> {
        self.check(collection).await?;
        self.inner.list(collection, query).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: FieldPatch,
    ) -> AppResult<Document> {
        self.check(collection).await?;
        self.inner.update(collection, id, patch).await
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<()> {
        self.check(collection).await?;
        self.inner.delete(collection, id).await
    }
}

/// A [`MediaResolver`] over [`MemoryResolver`] whose deletes fail while
/// the fault is armed, for exercising the best-effort cleanup path.
#[derive(Debug)]
pub struct FlakyResolver {
    inner: MemoryResolver,
    failing: RwLock<bool>,
}

impl FlakyResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryResolver::new(),
            failing: RwLock::new(false),
        })
    }

    /// Arm the fault: delete_by_url starts failing.
    pub async fn fail_deletes(&self) {
        *self.failing.write().await = true;
    }

    /// Whether an asset is currently stored under this URL.
    pub async fn contains(&self, url: &str) -> bool {
        self.inner.contains(url).await
    }
}

#[async_trait]
impl MediaResolver for FlakyResolver {
    fn provider_type(&self) -> &str {
        "flaky"
    }

    async fn upload(&self, data: Bytes, file_name: &str, folder: &str) -> AppResult<MediaUpload> {
        self.inner.upload(data, file_name, folder).await
    }

    async fn delete_by_url(&self, url: &str) -> AppResult<()> {
        if *self.failing.read().await {
            return Err(AppError::external_service(format!(
                "Injected failure deleting '{url}'"
            )));
        }
        self.inner.delete_by_url(url).await
    }
}
