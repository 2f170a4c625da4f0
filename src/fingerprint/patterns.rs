//! Pattern compilation and tag scanning.
//!
//! All fingerprint and heuristic patterns are plain regular expressions matched
//! case-insensitively. Content patterns additionally let `.` cross newlines,
//! since markup routinely spans lines.

use regex::{Regex, RegexBuilder};

use crate::error_handling::PatternError;

/// Compiles a pattern matched against a short value (hostname, header value, URL).
pub(crate) fn compile_value_pattern(owner: &str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| pattern_error(owner, pattern, e))
}

/// Compiles a pattern searched across the full HTML or script text.
pub(crate) fn compile_content_pattern(owner: &str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .map_err(|e| pattern_error(owner, pattern, e))
}

/// Compiles a list of content patterns owned by the same detector.
pub(crate) fn compile_content_patterns(
    owner: &str,
    patterns: &[&str],
) -> Result<Vec<Regex>, PatternError> {
    patterns
        .iter()
        .map(|p| compile_content_pattern(owner, p))
        .collect()
}

fn pattern_error(owner: &str, pattern: &str, error: regex::Error) -> PatternError {
    PatternError {
        owner: owner.to_string(),
        pattern: pattern.to_string(),
        message: error.to_string(),
    }
}

/// A URL-bearing attribute pulled from a `<script>`, `<link>` or `<img>` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUrl {
    /// Lower-cased tag name
    pub tag: String,
    /// Raw attribute value, not resolved against the page URL
    pub url: String,
    /// `type="module"` was present on the tag
    pub is_module: bool,
}

const TAG_URL_PATTERN: &str =
    r#"<(script|link|img)\b([^>]*?)\s(?:src|href)\s*=\s*["']([^"']+)["']([^>]*)>"#;
const MODULE_TYPE_PATTERN: &str = r#"\btype\s*=\s*["']?module\b"#;

/// Extracts every script/link/img URL from a page.
#[derive(Debug, Clone)]
pub struct TagScanner {
    tag_url: Regex,
    module_type: Regex,
}

impl TagScanner {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            tag_url: compile_content_pattern("tag scanner", TAG_URL_PATTERN)?,
            module_type: compile_value_pattern("tag scanner", MODULE_TYPE_PATTERN)?,
        })
    }

    /// Returns the tags in document order.
    pub fn scan(&self, html: &str) -> Vec<TagUrl> {
        self.tag_url
            .captures_iter(html)
            .filter_map(|caps| {
                let tag = caps.get(1)?.as_str().to_ascii_lowercase();
                let url = caps.get(3)?.as_str().trim().to_string();
                let before = caps.get(2).map_or("", |m| m.as_str());
                let after = caps.get(4).map_or("", |m| m.as_str());
                let is_module =
                    self.module_type.is_match(before) || self.module_type.is_match(after);
                Some(TagUrl {
                    tag,
                    url,
                    is_module,
                })
            })
            .collect()
    }
}
