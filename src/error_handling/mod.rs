//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, pattern compilation, fetch)
//! - Categorization of HTTP client failures into fetch errors
//! - Per-bucket batch counters
//!
//! Fetch errors are terminal for a single URL (bucket `unknown`) but never for a
//! batch; pattern errors are terminal for the process.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use stats::BucketStats;
pub use types::{FetchError, InitializationError, PatternError};
