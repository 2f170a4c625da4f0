//! Content-based platform detection.
//!
//! Meta tag, HTML comment, DOM attribute, CSS, JS global and inline script
//! groups all search the full HTML text. Only the first match per entry is
//! recorded; repeated occurrences add nothing.

use crate::fingerprint::models::PatternGroup;
use crate::models::Signal;

/// Checks every entry of a content group against the page HTML.
pub(crate) fn check_body(group: &PatternGroup, html: &str) -> Vec<Signal> {
    let category = group.category.signal_category();

    group
        .entries
        .iter()
        .filter_map(|entry| {
            entry.regex.find(html).map(|m| {
                Signal::new(category, entry.confidence, &entry.description, m.as_str())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::models::{Fingerprint, FingerprintSpec, PatternCategory, PatternSpec};
    use crate::models::Confidence;

    const SPEC: FingerprintSpec = FingerprintSpec {
        platform: "Body",
        css: &[
            PatternSpec {
                pattern: r"\bsqs-block\b",
                confidence: Confidence::Medium,
                description: "block class",
            },
            PatternSpec {
                pattern: r"\bsqs-gallery\b",
                confidence: Confidence::Low,
                description: "gallery class",
            },
        ],
        html_comments: &[PatternSpec {
            pattern: r"<!--\s*built with\s.+?-->",
            confidence: Confidence::High,
            description: "builder comment",
        }],
        ..FingerprintSpec::EMPTY
    };

    fn group(category: PatternCategory) -> PatternGroup {
        Fingerprint::compile(&SPEC)
            .unwrap()
            .groups
            .into_iter()
            .find(|g| g.category == category)
            .unwrap()
    }

    #[test]
    fn test_first_match_per_entry_only() {
        let html = r#"<div class="sqs-block"></div><div class="SQS-BLOCK"></div>"#;
        let signals = check_body(&group(PatternCategory::CssClass), html);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].matched_value, "sqs-block");
        assert_eq!(signals[0].category, "css_class");
    }

    #[test]
    fn test_multiline_comment_matches() {
        let html = "<html><!-- Built with\n  SiteMaker --></html>";
        let signals = check_body(&group(PatternCategory::HtmlComment), html);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].category, "html_comment");
        assert!(signals[0].matched_value.starts_with("<!-- Built with"));
    }

    #[test]
    fn test_no_match_in_plain_page() {
        let html = "<html><body><p>hello</p></body></html>";
        assert!(check_body(&group(PatternCategory::CssClass), html).is_empty());
    }
}
