//! Shared string utilities.

pub mod sanitize;

pub use sanitize::{sanitize_and_truncate_error_message, truncate_chars};
