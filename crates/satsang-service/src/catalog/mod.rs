//! Flat catalog collection services.

pub mod service;

pub use service::CatalogService;
