//! Script, stylesheet and image URL detection.
//!
//! URLs are pulled out of `<script src>`, `<link href>` and `<img src>` tags
//! first; each tag's URL is then tested against the group's patterns and the
//! first pattern that matches produces one signal for that tag.

use crate::fingerprint::models::PatternGroup;
use crate::fingerprint::patterns::TagUrl;
use crate::models::Signal;

/// Checks every extracted tag URL against a source group.
pub(crate) fn check_sources(group: &PatternGroup, tags: &[TagUrl]) -> Vec<Signal> {
    let category = group.category.signal_category();

    tags.iter()
        .filter_map(|tag| {
            group
                .entries
                .iter()
                .find(|entry| entry.regex.is_match(&tag.url))
                .map(|entry| Signal::new(category, entry.confidence, &entry.description, &tag.url))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::models::{Fingerprint, FingerprintSpec, PatternCategory, PatternSpec};
    use crate::fingerprint::patterns::TagScanner;
    use crate::models::Confidence;

    const SPEC: FingerprintSpec = FingerprintSpec {
        platform: "Sources",
        sources: &[
            PatternSpec {
                pattern: r"//cdn\.builder\.test/",
                confidence: Confidence::High,
                description: "builder CDN",
            },
            PatternSpec {
                pattern: r"\.builder\.test/",
                confidence: Confidence::Low,
                description: "any builder host",
            },
        ],
        ..FingerprintSpec::EMPTY
    };

    fn source_group() -> PatternGroup {
        Fingerprint::compile(&SPEC)
            .unwrap()
            .groups
            .into_iter()
            .find(|g| g.category == PatternCategory::SourceUrl)
            .unwrap()
    }

    #[test]
    fn test_one_signal_per_tag_first_pattern_wins() {
        let html = r#"
            <script src="https://cdn.builder.test/runtime.js"></script>
            <link rel="stylesheet" href="https://cdn.builder.test/site.css">
            <img src="https://img.builder.test/logo.png">
        "#;
        let tags = TagScanner::new().unwrap().scan(html);
        let signals = check_sources(&source_group(), &tags);

        assert_eq!(signals.len(), 3);
        assert!(signals.iter().all(|s| s.category == "cdn_url"));
        assert_eq!(signals[0].confidence, Confidence::High);
        assert_eq!(signals[1].confidence, Confidence::High);
        assert_eq!(signals[2].confidence, Confidence::Low);
        assert_eq!(signals[2].matched_value, "https://img.builder.test/logo.png");
    }

    #[test]
    fn test_unrelated_urls_ignored() {
        let tags = TagScanner::new()
            .unwrap()
            .scan(r#"<script src="/static/app.js"></script>"#);
        assert!(check_sources(&source_group(), &tags).is_empty());
    }
}
