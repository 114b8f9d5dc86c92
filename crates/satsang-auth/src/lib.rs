//! # satsang-auth
//!
//! Identity provider backends and the session gate for the Satsang
//! admin service. Credential verification is delegated to the external
//! provider; this crate only tracks which identity is signed in and
//! hands out opaque session tokens for the HTTP layer.

pub mod firebase;
pub mod gate;
pub mod memory;

use std::sync::Arc;

use satsang_core::config::auth::AuthConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::IdentityProvider;

pub use firebase::FirebaseIdentityProvider;
pub use gate::{AuthGate, Session};
pub use memory::MemoryIdentityProvider;

/// Construct the configured identity provider backend.
pub fn from_config(config: &AuthConfig) -> AppResult<Arc<dyn IdentityProvider>> {
    match config.provider.as_str() {
        "memory" => Ok(Arc::new(MemoryIdentityProvider::new(
            config.static_credentials.clone(),
        ))),
        "firebase" => Ok(Arc::new(FirebaseIdentityProvider::new(config)?)),
        other => Err(AppError::configuration(format!(
            "Unknown auth provider '{other}'. Expected one of: firebase, memory"
        ))),
    }
}
