//! Core type definitions used across the Satsang workspace.

pub mod document;
pub mod id;
pub mod pagination;

pub use document::{Document, FieldPatch, Fields, ListQuery};
pub use id::DocumentId;
pub use pagination::{PageRequest, PageResponse};
