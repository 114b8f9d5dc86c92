//! Static credential provider for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;

use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::{Identity, IdentityProvider};

/// An [`IdentityProvider`] over a fixed email → password map.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    credentials: HashMap<String, String>,
}

impl MemoryIdentityProvider {
    /// Create a provider with the given credentials.
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Self { credentials }
    }

    /// Convenience constructor for a single account.
    pub fn single(email: impl Into<String>, password: impl Into<String>) -> Self {
        let mut credentials = HashMap::new();
        credentials.insert(email.into(), password.into());
        Self { credentials }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        match self.credentials.get(email) {
            Some(stored) if stored == password => Ok(Identity {
                subject: format!("memory:{email}"),
                email: email.to_string(),
                display_name: None,
            }),
            _ => Err(AppError::authentication("Invalid email or password")),
        }
    }
}
