//! # satsang-api
//!
//! HTTP API layer for the Satsang admin service built on Axum.
//!
//! Provides all REST endpoints, middleware (auth, CORS, compression,
//! tracing), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
