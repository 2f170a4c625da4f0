//! Process-wide setup: logging and the HTTP client.
//!
//! Pattern tables are not initialized here; they compile on first access
//! through `fingerprint_library()` and `heuristic_patterns()`.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
