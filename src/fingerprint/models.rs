//! Data structures for the platform fingerprint library.
//!
//! Fingerprints are declared as static `FingerprintSpec` records (see
//! `library.rs`) and compiled once into `Fingerprint`s:
//! - `PatternSpec` / `HeaderSpec`: one (pattern, confidence, description) entry
//! - `FingerprintSpec`: all pattern groups for one platform
//! - `PatternGroup`: compiled entries for one observation category
//! - `FingerprintLibrary`: every compiled fingerprint, in declaration order

use regex::Regex;

use crate::error_handling::PatternError;
use crate::fingerprint::patterns::{compile_content_pattern, compile_value_pattern};
use crate::models::Confidence;

/// A static pattern entry: regex source, confidence tier, description.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub pattern: &'static str,
    pub confidence: Confidence,
    pub description: &'static str,
}

/// A static header rule. The pattern runs against the value of `header`.
///
/// A pattern of `^` turns the rule into a presence check.
#[derive(Debug, Clone, Copy)]
pub struct HeaderSpec {
    pub header: &'static str,
    pub pattern: &'static str,
    pub confidence: Confidence,
    pub description: &'static str,
}

/// Every pattern group declared for one platform.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintSpec {
    pub platform: &'static str,
    pub hostnames: &'static [PatternSpec],
    pub headers: &'static [HeaderSpec],
    pub meta_tags: &'static [PatternSpec],
    pub html_comments: &'static [PatternSpec],
    pub dom_attributes: &'static [PatternSpec],
    pub css: &'static [PatternSpec],
    pub js_globals: &'static [PatternSpec],
    pub sources: &'static [PatternSpec],
    pub inline_scripts: &'static [PatternSpec],
}

impl FingerprintSpec {
    /// Base for struct-update syntax in the library table.
    pub const EMPTY: FingerprintSpec = FingerprintSpec {
        platform: "",
        hostnames: &[],
        headers: &[],
        meta_tags: &[],
        html_comments: &[],
        dom_attributes: &[],
        css: &[],
        js_globals: &[],
        sources: &[],
        inline_scripts: &[],
    };
}

/// Observation category a pattern group runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    Hostname,
    HttpHeader,
    MetaTag,
    HtmlComment,
    DomAttribute,
    CssClass,
    JsGlobal,
    /// script src, link href and img src URLs
    SourceUrl,
    InlineScript,
}

impl PatternCategory {
    /// Category name recorded on signals from this group.
    pub fn signal_category(self) -> &'static str {
        match self {
            PatternCategory::Hostname => "hostname",
            PatternCategory::HttpHeader => "http_header",
            PatternCategory::MetaTag => "meta_tag",
            PatternCategory::HtmlComment => "html_comment",
            PatternCategory::DomAttribute => "dom_attribute",
            PatternCategory::CssClass => "css_class",
            PatternCategory::JsGlobal => "js_global",
            PatternCategory::SourceUrl => "cdn_url",
            PatternCategory::InlineScript => "inline_script",
        }
    }

    /// Whether the group searches the full HTML text.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            PatternCategory::MetaTag
                | PatternCategory::HtmlComment
                | PatternCategory::DomAttribute
                | PatternCategory::CssClass
                | PatternCategory::JsGlobal
                | PatternCategory::InlineScript
        )
    }
}

/// A compiled pattern entry.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub regex: Regex,
    pub confidence: Confidence,
    pub description: String,
    /// Header the entry inspects; only set in `HttpHeader` groups
    pub header: Option<String>,
}

/// Compiled entries for one observation category, in declaration order.
#[derive(Debug, Clone)]
pub struct PatternGroup {
    pub category: PatternCategory,
    pub entries: Vec<PatternEntry>,
}

/// A compiled platform fingerprint.
#[derive(Debug, Clone)]
pub struct Fingerprint {
    pub platform: String,
    pub groups: Vec<PatternGroup>,
}

impl Fingerprint {
    /// Compiles every pattern of `spec`.
    ///
    /// # Errors
    ///
    /// Returns `PatternError` naming the platform and the first pattern that
    /// is not a valid regular expression.
    pub fn compile(spec: &FingerprintSpec) -> Result<Self, PatternError> {
        let owner = spec.platform;
        let mut groups = Vec::new();

        let plain_groups = [
            (PatternCategory::Hostname, spec.hostnames),
            (PatternCategory::MetaTag, spec.meta_tags),
            (PatternCategory::HtmlComment, spec.html_comments),
            (PatternCategory::DomAttribute, spec.dom_attributes),
            (PatternCategory::CssClass, spec.css),
            (PatternCategory::JsGlobal, spec.js_globals),
            (PatternCategory::SourceUrl, spec.sources),
            (PatternCategory::InlineScript, spec.inline_scripts),
        ];

        for (category, specs) in plain_groups {
            if specs.is_empty() {
                continue;
            }
            let entries = specs
                .iter()
                .map(|p| -> Result<PatternEntry, PatternError> {
                    let regex = if category.is_content() {
                        compile_content_pattern(owner, p.pattern)?
                    } else {
                        compile_value_pattern(owner, p.pattern)?
                    };
                    Ok(PatternEntry {
                        regex,
                        confidence: p.confidence,
                        description: p.description.to_string(),
                        header: None,
                    })
                })
                .collect::<Result<Vec<_>, PatternError>>()?;
            groups.push(PatternGroup { category, entries });
        }

        if !spec.headers.is_empty() {
            let entries = spec
                .headers
                .iter()
                .map(|h| -> Result<PatternEntry, PatternError> {
                    Ok(PatternEntry {
                        regex: compile_value_pattern(owner, h.pattern)?,
                        confidence: h.confidence,
                        description: h.description.to_string(),
                        header: Some(h.header.to_ascii_lowercase()),
                    })
                })
                .collect::<Result<Vec<_>, PatternError>>()?;
            groups.push(PatternGroup {
                category: PatternCategory::HttpHeader,
                entries,
            });
        }

        Ok(Self {
            platform: owner.to_string(),
            groups,
        })
    }

    /// Total number of pattern entries across all groups.
    pub fn pattern_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// All compiled fingerprints, kept in declaration order.
///
/// Declaration order is the tie-break order when two platforms reach the same
/// best score.
#[derive(Debug, Clone, Default)]
pub struct FingerprintLibrary {
    fingerprints: Vec<Fingerprint>,
}

impl FingerprintLibrary {
    /// Compiles a library from static specs.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed pattern.
    pub fn compile(specs: &[FingerprintSpec]) -> Result<Self, PatternError> {
        let fingerprints = specs
            .iter()
            .map(Fingerprint::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fingerprints })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fingerprint> {
        self.fingerprints.iter()
    }

    pub fn get(&self, platform: &str) -> Option<&Fingerprint> {
        self.fingerprints.iter().find(|f| f.platform == platform)
    }

    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}
