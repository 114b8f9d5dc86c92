//! Firebase Identity Toolkit provider.

use async_trait::async_trait;
use serde_json::{json, Value};

use satsang_core::config::auth::AuthConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::{Identity, IdentityProvider};

const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase [`IdentityProvider`] backend.
#[derive(Debug)]
pub struct FirebaseIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FirebaseIdentityProvider {
    /// Create a provider from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.api_key.is_empty() {
            return Err(AppError::configuration(
                "auth.api_key is required for the firebase provider",
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    fn provider_type(&self) -> &str {
        "firebase"
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        let url = format!("{}/accounts:signInWithPassword", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    satsang_core::error::ErrorKind::ExternalService,
                    "Identity provider request failed",
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            // Wrong credentials surface as a 400 with an error message;
            // keep the provider's reason out of the user-facing text.
            tracing::warn!(%email, %status, "Sign-in rejected by identity provider");
            return Err(AppError::authentication("Invalid email or password"));
        }

        let payload: Value = response.json().await.map_err(|e| {
            AppError::with_source(
                satsang_core::error::ErrorKind::ExternalService,
                "Failed to read identity provider response",
                e,
            )
        })?;
        let subject = payload
            .get("localId")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::external_service("Sign-in response missing localId"))?;

        Ok(Identity {
            subject: subject.to_string(),
            email: payload
                .get("email")
                .and_then(Value::as_str)
                .unwrap_or(email)
                .to_string(),
            display_name: payload
                .get("displayName")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}
