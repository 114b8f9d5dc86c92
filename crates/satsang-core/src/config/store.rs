//! Remote document store configuration.

use serde::{Deserialize, Serialize};

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend to use: `"firestore"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Firestore project id.
    #[serde(default)]
    pub project_id: String,
    /// Firestore database id.
    #[serde(default = "default_database_id")]
    pub database_id: String,
    /// Bearer token presented to the store, when required.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Base URL override (emulator or test double).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            project_id: String::new(),
            database_id: default_database_id(),
            auth_token: None,
            base_url: None,
            request_timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_timeout() -> u64 {
    30
}
