//! The AI-audio content tree service.

pub mod service;

pub use service::ContentTreeService;
