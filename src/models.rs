//! Core records shared by the matcher, the heuristics and the scorer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::config::{
    MAX_MATCHED_VALUE_CHARS, WEIGHT_HIGH, WEIGHT_LOW, WEIGHT_MEDIUM, WEIGHT_UNRATED,
};
use crate::utils::truncate_chars;

/// Confidence tier of a single signal.
///
/// Deserializes from `"high"`, `"medium"` or `"low"`; any other label becomes
/// `Unrated`, which carries the smallest weight instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[serde(rename = "unknown")]
    Unrated,
}

impl Confidence {
    /// Score weight of this tier.
    pub fn weight(self) -> u32 {
        match self {
            Confidence::High => WEIGHT_HIGH,
            Confidence::Medium => WEIGHT_MEDIUM,
            Confidence::Low => WEIGHT_LOW,
            Confidence::Unrated => WEIGHT_UNRATED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
            Confidence::Unrated => "unknown",
        }
    }
}

impl From<String> for Confidence {
    fn from(label: String) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            "low" => Confidence::Low,
            _ => Confidence::Unrated,
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An atomic observation that fired against a page.
///
/// Immutable once created. The matched value is capped at
/// `MAX_MATCHED_VALUE_CHARS` so a greedy pattern can't drag a whole page into
/// the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub category: String,
    pub confidence: Confidence,
    pub description: String,
    pub matched_value: String,
}

impl Signal {
    pub fn new(
        category: impl Into<String>,
        confidence: Confidence,
        description: impl Into<String>,
        matched_value: &str,
    ) -> Self {
        Self {
            category: category.into(),
            confidence,
            description: description.into(),
            matched_value: truncate_chars(matched_value, MAX_MATCHED_VALUE_CHARS),
        }
    }
}

/// Everything the engine analyzes for one page.
///
/// Header names and the hostname are lower-cased on construction so lookups
/// never depend on how the server spelled them.
#[derive(Debug, Clone, Default)]
pub struct PageArtifacts {
    pub html: String,
    pub headers: HashMap<String, String>,
    pub hostname: String,
}

impl PageArtifacts {
    pub fn new<I, K, V>(html: impl Into<String>, headers: I, hostname: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect();
        Self {
            html: html.into(),
            headers,
            hostname: hostname.to_ascii_lowercase(),
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_confidence_weights() {
        assert_eq!(Confidence::High.weight(), 10);
        assert_eq!(Confidence::Medium.weight(), 5);
        assert_eq!(Confidence::Low.weight(), 2);
        assert_eq!(Confidence::Unrated.weight(), 1);
    }

    #[test]
    fn test_confidence_weights_strictly_ordered() {
        let weights: Vec<u32> = Confidence::iter().map(Confidence::weight).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_confidence_deserializes_unknown_label_as_unrated() {
        let parsed: Confidence = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Confidence::High);
        let parsed: Confidence = serde_json::from_str("\"certain\"").unwrap();
        assert_eq!(parsed, Confidence::Unrated);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&Confidence::Unrated).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn test_signal_truncates_matched_value() {
        let long = "a".repeat(500);
        let signal = Signal::new("css_class", Confidence::Low, "many classes", &long);
        assert_eq!(signal.matched_value.chars().count(), MAX_MATCHED_VALUE_CHARS);
    }

    #[test]
    fn test_page_artifacts_lowercases_headers_and_hostname() {
        let artifacts = PageArtifacts::new(
            "<html></html>",
            [("Server", "Pepyaka/1.19"), ("X-Wix-Request-Id", "abc")],
            "Demo.WixSite.com",
        );
        assert_eq!(artifacts.hostname, "demo.wixsite.com");
        assert_eq!(artifacts.header("server"), Some("Pepyaka/1.19"));
        assert_eq!(artifacts.header("X-WIX-REQUEST-ID"), Some("abc"));
        assert_eq!(artifacts.header("x-missing"), None);
    }
}
