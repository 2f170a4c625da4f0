//! The per-URL result record.

use serde::Serialize;

use crate::error_handling::FetchError;
use crate::models::Signal;
use crate::scoring::{Bucket, BucketConfidence, PlatformScore};
use crate::utils::sanitize_and_truncate_error_message;

/// Outcome of detecting one URL.
///
/// When `error` is set the bucket is `unknown` and every score and signal
/// field is empty. Platform fields are only filled for `platform-assisted`;
/// AI fields are filled whenever the page was fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    /// URL as given by the caller
    pub url: String,
    /// URL after redirects
    pub final_url: Option<String>,
    /// HTTP status of the final response
    pub status: Option<u16>,
    pub bucket: Bucket,
    pub confidence: BucketConfidence,
    /// Winning platform
    pub platform: Option<String>,
    pub platform_score: u32,
    pub platform_signals: Vec<Signal>,
    /// Score of every fingerprint, in library order
    pub platform_scores: Vec<PlatformScore>,
    pub ai_score: u32,
    pub ai_signals: Vec<Signal>,
    pub error: Option<String>,
}

impl DetectionResult {
    /// Result for a URL whose page could not be fetched.
    pub fn failed(url: &str, error: &FetchError) -> Self {
        Self {
            url: url.to_string(),
            final_url: None,
            status: None,
            bucket: Bucket::Unknown,
            confidence: BucketConfidence::None,
            platform: None,
            platform_score: 0,
            platform_signals: Vec::new(),
            platform_scores: Vec::new(),
            ai_score: 0,
            ai_signals: Vec::new(),
            error: Some(sanitize_and_truncate_error_message(&error.to_string())),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
