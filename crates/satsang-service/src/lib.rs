//! # satsang-service
//!
//! Business services for the Satsang admin console: the AI-audio
//! content tree with cascading lifecycle management, the flat catalog
//! projections, and the read-only dashboard aggregation.

pub mod catalog;
pub mod content_tree;
pub mod dashboard;

pub use catalog::CatalogService;
pub use content_tree::ContentTreeService;
pub use dashboard::{DashboardService, DashboardSummary};
