//! Seam traits defined in `satsang-core` and implemented by other crates.

pub mod identity;
pub mod media;
pub mod store;

pub use identity::{Identity, IdentityProvider};
pub use media::{MediaResolver, MediaUpload};
pub use store::DocumentStore;
