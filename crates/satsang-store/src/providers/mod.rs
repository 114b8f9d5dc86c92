//! Document store backend implementations.

pub mod firestore;
pub mod memory;

use std::sync::Arc;

use satsang_core::config::store::StoreConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::DocumentStore;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

/// Construct the configured document store backend.
pub fn from_config(config: &StoreConfig) -> AppResult<Arc<dyn DocumentStore>> {
    match config.provider.as_str() {
        "memory" => Ok(Arc::new(MemoryStore::new())),
        "firestore" => Ok(Arc::new(FirestoreStore::new(config)?)),
        other => Err(AppError::configuration(format!(
            "Unknown store provider '{other}'. Expected one of: firestore, memory"
        ))),
    }
}
