//! site_origin library: classifies how a website was built
//!
//! A page is fetched, matched against a library of site-builder fingerprints
//! and run through a battery of AI-assistant heuristics. Both signal sets are
//! scored and the site lands in one of four buckets: `platform-assisted`,
//! `ai-assisted`, `no-ai-signals` or `unknown`.
//!
//! # Example
//!
//! ```no_run
//! use site_origin::{init_client, Config, Detector, HttpFetcher};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let fetcher = HttpFetcher::new(init_client(&config)?, &config);
//! let detector = Detector::new(fetcher)?;
//!
//! let result = detector.detect("example.com").await;
//! println!("{} ({})", result.bucket, result.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! Already-fetched pages can be analyzed without any network access through
//! [`Detector::analyze`].
//!
//! # Requirements
//!
//! Detection is async and needs a Tokio runtime.

mod app;
pub mod config;
mod detect;
mod error_handling;
mod fetch;
pub mod fingerprint;
pub mod heuristics;
pub mod initialization;
mod models;
mod run;
pub mod scoring;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use detect::{detect_batch, DetectionResult, Detector};
pub use error_handling::{BucketStats, FetchError, InitializationError, PatternError};
pub use fetch::{discover_script_url, normalize_url, FetchedPage, HttpFetcher, PageFetcher};
pub use initialization::{init_client, init_logger_with};
pub use models::{Confidence, PageArtifacts, Signal};
pub use run::{run_detection, RunReport};
pub use scoring::{Bucket, BucketConfidence, PlatformScore};
