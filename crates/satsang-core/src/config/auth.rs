//! Identity provider configuration.

use serde::{Deserialize, Serialize};

/// Identity provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Backend to use: `"firebase"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Firebase web API key.
    #[serde(default)]
    pub api_key: String,
    /// Base URL override (emulator or test double).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Static credentials for the memory provider (tests and local
    /// development), as `email = "password"` pairs.
    #[serde(default)]
    pub static_credentials: std::collections::HashMap<String, String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            base_url: None,
            static_credentials: std::collections::HashMap::new(),
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}
