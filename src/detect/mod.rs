//! Per-URL detection pipeline.
//!
//! Fetch the page, optionally fetch one script bundle, match every platform
//! fingerprint, run the AI heuristics, score both and pick a bucket. The
//! analysis half is synchronous and pure; only the fetches touch the network.

mod result;

use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use url::Url;

use crate::config::URL_PROCESSING_TIMEOUT;
use crate::error_handling::{FetchError, PatternError};
use crate::fetch::{discover_script_url, normalize_url, FetchedPage, PageFetcher};
use crate::fingerprint::{
    fingerprint_library, match_library, tag_scanner, FingerprintLibrary, TagScanner, TagUrl,
};
use crate::heuristics::{extract_ai_signals, heuristic_patterns, HeuristicPatterns};
use crate::models::PageArtifacts;
use crate::scoring::{best_platform, decide, score, PlatformScore};

pub use result::DetectionResult;

/// Classifies websites using a `PageFetcher`.
///
/// Holds only read-only tables and the fetcher; one detector serves any number
/// of concurrent detections.
pub struct Detector<F> {
    fetcher: F,
    library: &'static FingerprintLibrary,
    scanner: &'static TagScanner,
    heuristics: &'static HeuristicPatterns,
    fetch_scripts: bool,
    pipeline_timeout: Duration,
}

impl<F: PageFetcher> Detector<F> {
    /// Creates a detector over the built-in pattern tables.
    ///
    /// # Errors
    ///
    /// Returns `PatternError` if any built-in pattern fails to compile.
    pub fn new(fetcher: F) -> Result<Self, PatternError> {
        Ok(Self {
            fetcher,
            library: fingerprint_library()?,
            scanner: tag_scanner()?,
            heuristics: heuristic_patterns()?,
            fetch_scripts: true,
            pipeline_timeout: URL_PROCESSING_TIMEOUT,
        })
    }

    /// Enables or disables the adjunct script fetch.
    pub fn with_script_fetch(mut self, enabled: bool) -> Self {
        self.fetch_scripts = enabled;
        self
    }

    /// Sets the bound on one URL's whole pipeline (fetches plus analysis).
    pub fn with_pipeline_timeout(mut self, timeout: Duration) -> Self {
        self.pipeline_timeout = timeout;
        self
    }

    /// Detects the origin of one URL.
    ///
    /// Never fails: an unusable input or a failed page fetch yields an
    /// `unknown` result carrying the error message.
    pub async fn detect(&self, input: &str) -> DetectionResult {
        let url = match normalize_url(input) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Rejected input {input:?}: {e}");
                return DetectionResult::failed(input, &e);
            }
        };

        let result = match tokio::time::timeout(self.pipeline_timeout, self.run(input, &url)).await {
            Ok(result) => result,
            Err(_) => DetectionResult::failed(
                input,
                &FetchError::Timeout(format!(
                    "detection exceeded {}ms",
                    self.pipeline_timeout.as_millis()
                )),
            ),
        };

        match &result.error {
            Some(error) => log::warn!("{input}: {error}"),
            None => log::info!(
                "{input}: {} ({}){}",
                result.bucket,
                result.confidence,
                result
                    .platform
                    .as_deref()
                    .map(|p| format!(" [{p}]"))
                    .unwrap_or_default()
            ),
        }
        result
    }

    async fn run(&self, input: &str, url: &Url) -> DetectionResult {
        let page = match self.fetcher.fetch_page(url).await {
            Ok(page) => page,
            Err(e) => return DetectionResult::failed(input, &e),
        };

        let tags = self.scanner.scan(&page.html);
        let bundle = self.fetch_bundle(&tags, &page.final_url).await;

        let FetchedPage {
            final_url,
            status,
            headers,
            html,
        } = page;
        let hostname = final_url.host_str().unwrap_or_default().to_string();
        let artifacts = PageArtifacts::new(html, headers, &hostname);

        let mut result = self.assemble(input, final_url.as_str(), &artifacts, &tags, bundle.as_deref());
        result.status = Some(status);
        result
    }

    /// Fetches the adjunct script; failures only cost heuristic depth.
    async fn fetch_bundle(&self, tags: &[TagUrl], page_url: &Url) -> Option<String> {
        if !self.fetch_scripts {
            return None;
        }
        let script_url = discover_script_url(tags, page_url)?;
        match self.fetcher.fetch_script(&script_url).await {
            Ok(script) => Some(script),
            Err(e) => {
                log::debug!("Script fetch {script_url} failed, using HTML only: {e}");
                None
            }
        }
    }

    /// Analyzes already-fetched artifacts.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL as requested
    /// * `final_url` - The URL the artifacts were served from
    /// * `artifacts` - Page HTML, headers and final hostname
    /// * `script_bundle` - Adjunct script text, if any; only feeds the AI heuristics
    pub fn analyze(
        &self,
        url: &str,
        final_url: &str,
        artifacts: &PageArtifacts,
        script_bundle: Option<&str>,
    ) -> DetectionResult {
        let tags = self.scanner.scan(&artifacts.html);
        self.assemble(url, final_url, artifacts, &tags, script_bundle)
    }

    fn assemble(
        &self,
        url: &str,
        final_url: &str,
        artifacts: &PageArtifacts,
        tags: &[TagUrl],
        script_bundle: Option<&str>,
    ) -> DetectionResult {
        let matches = match_library(self.library, artifacts, tags);
        let platform_scores: Vec<PlatformScore> = matches
            .iter()
            .map(|m| PlatformScore {
                platform: m.platform.clone(),
                score: score(&m.signals),
            })
            .collect();
        let best = best_platform(&platform_scores);
        let best_score = best.map_or(0, |i| platform_scores[i].score);

        let ai_signals = extract_ai_signals(self.heuristics, artifacts, script_bundle);
        let ai_score = score(&ai_signals);

        let decision = decide(best_score, ai_score);

        let (platform, platform_score, platform_signals) = match best {
            Some(index) if decision.is_platform() => {
                let winner = matches.into_iter().nth(index);
                let (name, signals) = winner
                    .map(|m| (Some(m.platform), m.signals))
                    .unwrap_or_default();
                (name, best_score, signals)
            }
            _ => (None, 0, Vec::new()),
        };

        DetectionResult {
            url: url.to_string(),
            final_url: Some(final_url.to_string()),
            status: None,
            bucket: decision.bucket,
            confidence: decision.confidence,
            platform,
            platform_score,
            platform_signals,
            platform_scores,
            ai_score,
            ai_signals,
            error: None,
        }
    }
}

/// Detects a batch of URLs with at most `max_concurrency` in flight.
///
/// Results are yielded as they complete, not in input order.
pub fn detect_batch<'a, F: PageFetcher>(
    detector: &'a Detector<F>,
    urls: Vec<String>,
    max_concurrency: usize,
) -> impl Stream<Item = DetectionResult> + 'a {
    stream::iter(urls)
        .map(move |url| async move { detector.detect(&url).await })
        .buffer_unordered(max_concurrency.max(1))
}
