//! # satsang-store
//!
//! Document store backends and typed repositories for the Satsang admin
//! service. The [`DocumentStore`](satsang_core::traits::DocumentStore)
//! trait is defined in `satsang-core`; this crate provides the
//! Firestore REST backend, the in-memory backend used by tests and
//! local development, and per-collection repositories that translate
//! between raw documents and the typed entities.

pub mod codec;
pub mod providers;
pub mod repositories;
