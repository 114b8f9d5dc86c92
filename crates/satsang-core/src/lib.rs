//! # satsang-core
//!
//! Core crate for the Satsang admin service. Contains the seam traits
//! (document store, media resolver, identity provider), configuration
//! schemas, shared types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Satsang crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
