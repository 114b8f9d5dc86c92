//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::AuthSession;
pub use pagination::PaginationParams;
