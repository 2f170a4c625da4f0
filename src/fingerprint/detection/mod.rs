//! Platform fingerprint matching.
//!
//! Applies a fingerprint's pattern groups to one page's artifacts and returns
//! the signals that fired. Matching is pure: no I/O, no shared state, and the
//! result does not depend on the order groups are visited in.

mod body;
mod headers;
mod hostname;
mod sources;

use serde::Serialize;

use crate::fingerprint::models::{Fingerprint, FingerprintLibrary, PatternCategory};
use crate::fingerprint::patterns::TagUrl;
use crate::models::{PageArtifacts, Signal};

use body::check_body;
use headers::check_headers;
use hostname::check_hostname;
use sources::check_sources;

/// Signals one platform produced against a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformMatch {
    pub platform: String,
    pub signals: Vec<Signal>,
}

/// Matches one fingerprint against a page.
///
/// # Arguments
///
/// * `fingerprint` - The compiled platform fingerprint
/// * `artifacts` - Page HTML, lower-cased headers and final hostname
/// * `tags` - Script/link/img URLs already extracted from `artifacts.html`
pub fn match_fingerprint(
    fingerprint: &Fingerprint,
    artifacts: &PageArtifacts,
    tags: &[TagUrl],
) -> Vec<Signal> {
    let mut signals = Vec::new();

    for group in &fingerprint.groups {
        let fired = match group.category {
            PatternCategory::Hostname => check_hostname(group, &artifacts.hostname),
            PatternCategory::HttpHeader => check_headers(group, &artifacts.headers),
            PatternCategory::SourceUrl => check_sources(group, tags),
            PatternCategory::MetaTag
            | PatternCategory::HtmlComment
            | PatternCategory::DomAttribute
            | PatternCategory::CssClass
            | PatternCategory::JsGlobal
            | PatternCategory::InlineScript => check_body(group, &artifacts.html),
        };
        signals.extend(fired);
    }

    if !signals.is_empty() {
        log::debug!(
            "Fingerprint {} fired {} signal(s) on {}",
            fingerprint.platform,
            signals.len(),
            artifacts.hostname
        );
    }

    signals
}

/// Matches every fingerprint in the library, preserving declaration order.
///
/// Platforms with no signals are included with an empty list so callers can
/// build a complete score table.
pub fn match_library(
    library: &FingerprintLibrary,
    artifacts: &PageArtifacts,
    tags: &[TagUrl],
) -> Vec<PlatformMatch> {
    library
        .iter()
        .map(|fingerprint| PlatformMatch {
            platform: fingerprint.platform.clone(),
            signals: match_fingerprint(fingerprint, artifacts, tags),
        })
        .collect()
}
