//! HTTP request handlers grouped by domain.

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod health;
pub mod media;
pub mod tree;
