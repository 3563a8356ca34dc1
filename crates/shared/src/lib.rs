//! Shared library for the arXiv scraper workspace.
//!
//! This crate provides common functionality used by the binary crates:
//! - Configuration management
//! - Paper record model
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::{ArxivConfig, CategoryTable, Config, RequestHeaders};
pub use logging::LogConfig;
pub use models::*;

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
