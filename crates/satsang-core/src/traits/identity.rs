//! Identity provider trait for the authentication gate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// A resolved admin identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Provider-assigned subject id.
    pub subject: String,
    /// The signed-in email address.
    pub email: String,
    /// Optional display name from the provider.
    pub display_name: Option<String>,
}

/// Trait for credential-resolving backends.
///
/// Credential verification is fully delegated to the provider; this
/// application never sees or stores password material beyond passing it
/// through on sign-in. Token refresh and expiry management are out of
/// scope; a failed call is surfaced to the console for a manual retry.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "firebase", "memory").
    fn provider_type(&self) -> &str;

    /// Resolve an email/password credential to an identity.
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity>;
}
