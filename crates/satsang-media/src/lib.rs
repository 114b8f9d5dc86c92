//! # satsang-media
//!
//! Media resolver backends for the Satsang admin service. The
//! [`MediaResolver`](satsang_core::traits::MediaResolver) trait lives
//! in `satsang-core`; this crate implements it for the Cloudinary CDN
//! and for an in-memory double used by tests.

pub mod cloudinary;
pub mod memory;

use std::sync::Arc;

use satsang_core::config::media::MediaConfig;
use satsang_core::error::AppError;
use satsang_core::result::AppResult;
use satsang_core::traits::MediaResolver;

pub use cloudinary::CloudinaryResolver;
pub use memory::MemoryResolver;

/// Construct the configured media resolver backend.
pub fn from_config(config: &MediaConfig) -> AppResult<Arc<dyn MediaResolver>> {
    match config.provider.as_str() {
        "memory" => Ok(Arc::new(MemoryResolver::new())),
        "cloudinary" => Ok(Arc::new(CloudinaryResolver::new(config)?)),
        other => Err(AppError::configuration(format!(
            "Unknown media provider '{other}'. Expected one of: cloudinary, memory"
        ))),
    }
}
