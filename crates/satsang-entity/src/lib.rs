//! # satsang-entity
//!
//! Domain entity models for the Satsang admin service. Every struct in
//! this crate represents a document in a remote-store collection or a
//! domain value object. Persisted field names are camelCase, matching
//! the collections as the existing console wrote them.

pub mod audio_tree;
pub mod bhajan;
pub mod book;
pub mod event;
pub mod persisted;
pub mod slide;
pub mod status;
pub mod user;
pub mod wallpaper;

pub use persisted::Persisted;
pub use status::PublishStatus;
