//! Configuration constants.
//!
//! This module defines the scoring weights, classification thresholds, timeouts
//! and size limits used throughout the detector.

use std::time::Duration;

// Signal weights
/// Weight contributed by a high-confidence signal
pub const WEIGHT_HIGH: u32 = 10;
/// Weight contributed by a medium-confidence signal
pub const WEIGHT_MEDIUM: u32 = 5;
/// Weight contributed by a low-confidence signal
pub const WEIGHT_LOW: u32 = 2;
/// Weight for a signal whose confidence label was not recognized
pub const WEIGHT_UNRATED: u32 = 1;

/// Maximum contribution of a single signal category to a score.
/// Keeps one prolific category (e.g. dozens of CSS class hits) from
/// dominating the total.
pub const CATEGORY_SCORE_CAP: u32 = 15;

// Classification thresholds
/// Minimum best-platform score for the platform-assisted bucket
pub const PLATFORM_THRESHOLD: u32 = 5;
/// Minimum AI heuristic score for the ai-assisted bucket
pub const AI_THRESHOLD: u32 = 10;

// Signal payload limits
/// Maximum length of a signal's matched value in characters
pub const MAX_MATCHED_VALUE_CHARS: usize = 120;

// Network operation timeouts
/// Default primary page fetch timeout in seconds
pub const DEFAULT_PAGE_TIMEOUT_SECS: u64 = 10;
/// Default adjunct script fetch timeout in seconds
/// Kept short: the bundle only deepens heuristic matching
pub const DEFAULT_SCRIPT_TIMEOUT_SECS: u64 = 5;
/// Default number of URLs detected concurrently in a batch
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
/// Minimum bound on a single URL pipeline (page fetch + script fetch + analysis)
/// Longer fetch timeouts raise the bound; see `Config::pipeline_timeout`
pub const URL_PROCESSING_TIMEOUT: Duration = Duration::from_secs(30);
/// Slack added on top of the page and script timeouts for one URL pipeline
pub const PIPELINE_TIMEOUT_MARGIN_SECS: u64 = 5;

// Response and body size limits
/// Maximum page body size in bytes (2MB)
/// Larger bodies are truncated at this size before analysis
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum adjunct script bundle size in bytes (300KB)
pub const MAX_SCRIPT_BUNDLE_SIZE: usize = 300 * 1024;

// Error message limits
/// Maximum error message length in characters (500 chars)
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// Input limits
/// Maximum input URL length (2048 characters)
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
