//! Hostname-based platform detection.
//!
//! Hostname patterns run against the final (post-redirect) hostname only, never
//! the full URL, so paths and query strings can't produce false hits.

use crate::fingerprint::models::PatternGroup;
use crate::models::Signal;

/// Checks every hostname entry; each matching entry yields its own signal.
pub(crate) fn check_hostname(group: &PatternGroup, hostname: &str) -> Vec<Signal> {
    if hostname.is_empty() {
        return Vec::new();
    }
    let hostname = hostname.to_ascii_lowercase();
    let category = group.category.signal_category();

    group
        .entries
        .iter()
        .filter(|entry| entry.regex.is_match(&hostname))
        .map(|entry| Signal::new(category, entry.confidence, &entry.description, &hostname))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::models::{Fingerprint, FingerprintSpec, PatternCategory, PatternSpec};
    use crate::models::Confidence;

    const SPEC: FingerprintSpec = FingerprintSpec {
        platform: "Hosted",
        hostnames: &[
            PatternSpec {
                pattern: r"\.hosted\.io$",
                confidence: Confidence::High,
                description: "hosted.io subdomain",
            },
            PatternSpec {
                pattern: r"^preview-",
                confidence: Confidence::Low,
                description: "preview deployment",
            },
        ],
        ..FingerprintSpec::EMPTY
    };

    fn hostname_group() -> PatternGroup {
        Fingerprint::compile(&SPEC)
            .unwrap()
            .groups
            .into_iter()
            .find(|g| g.category == PatternCategory::Hostname)
            .unwrap()
    }

    #[test]
    fn test_every_matching_entry_fires() {
        let signals = check_hostname(&hostname_group(), "preview-shop.hosted.io");
        assert_eq!(signals.len(), 2);
        assert!(signals.iter().all(|s| s.category == "hostname"));
        assert_eq!(signals[0].matched_value, "preview-shop.hosted.io");
    }

    #[test]
    fn test_hostname_match_is_case_insensitive() {
        let signals = check_hostname(&hostname_group(), "Shop.HOSTED.io");
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].confidence, Confidence::High);
    }

    #[test]
    fn test_lookalike_hostname_does_not_match() {
        assert!(check_hostname(&hostname_group(), "hosted.io.example.com").is_empty());
        assert!(check_hostname(&hostname_group(), "").is_empty());
    }
}
