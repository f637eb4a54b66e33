//! Core utilities for the match analyst CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: Memo cache for feed lookups
//! - `config`: Environment-driven configuration
//! - `http`: Shared HTTP client construction

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{CacheKey, CacheStatus, MemoCache};
pub use config::Config;
pub use http::build_client;
