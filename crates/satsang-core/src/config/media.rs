//! Media CDN configuration.

use serde::{Deserialize, Serialize};

/// Media CDN configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Backend to use: `"cloudinary"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Cloudinary cloud name.
    #[serde(default)]
    pub cloud_name: String,
    /// API key for the admin API (delete-by-url).
    #[serde(default)]
    pub api_key: String,
    /// API secret for the admin API.
    #[serde(default)]
    pub api_secret: String,
    /// Unsigned upload preset used by the upload endpoint.
    #[serde(default)]
    pub upload_preset: String,
    /// Destination folder hint for uploads.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Base URL override (test double).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            upload_preset: String::new(),
            folder: default_folder(),
            base_url: None,
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_folder() -> String {
    "satsang".to_string()
}
