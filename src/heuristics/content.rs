//! Markup and script content heuristics.
//!
//! Each detector is independent and returns at most one signal. Counting rules
//! differ on purpose: some detectors count distinct patterns that fired, others
//! count every occurrence.

use regex::Regex;

use super::tables::{
    COMPONENT_MANY, COMPONENT_SOME, GENERIC_NAMING_MANY, GENERIC_NAMING_SOME,
    OVER_EXPLAINED_MANY, OVER_EXPLAINED_SOME, PLACEHOLDER_MANY, PLACEHOLDER_SOME,
    UTILITY_FAMILIES_MIN,
};
use super::HeuristicPatterns;
use crate::models::{Confidence, Signal};

/// Total occurrences of all patterns, plus the first matched text.
fn count_occurrences<'t>(patterns: &[Regex], text: &'t str) -> (usize, Option<&'t str>) {
    let mut total = 0;
    let mut first = None;
    for re in patterns {
        for m in re.find_iter(text) {
            total += 1;
            first.get_or_insert(m.as_str());
        }
    }
    (total, first)
}

/// Number of distinct patterns that fired, plus the first matched text.
fn count_distinct<'t>(patterns: &[Regex], text: &'t str) -> (usize, Option<&'t str>) {
    let mut distinct = 0;
    let mut first = None;
    for re in patterns {
        if let Some(m) = re.find(text) {
            distinct += 1;
            first.get_or_insert(m.as_str());
        }
    }
    (distinct, first)
}

/// First match of any pattern.
fn first_match<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.find(text).map(|m| m.as_str()))
}

fn tiered(count: usize, many: usize, some: usize, upper: Confidence, lower: Confidence) -> Option<Confidence> {
    if count >= many {
        Some(upper)
    } else if count >= some {
        Some(lower)
    } else {
        None
    }
}

/// Tutorial-style comments across HTML and script text.
pub(crate) fn detect_over_explanation(p: &HeuristicPatterns, text: &str) -> Option<Signal> {
    let (count, first) = count_occurrences(&p.over_explained, text);
    let confidence = tiered(
        count,
        OVER_EXPLAINED_MANY,
        OVER_EXPLAINED_SOME,
        Confidence::High,
        Confidence::Medium,
    )?;
    Some(Signal::new(
        "over_explained_comments",
        confidence,
        format!("Tutorial-style explanatory comments ({count} found)"),
        first.unwrap_or_default(),
    ))
}

/// Distinct UI component-library signatures.
pub(crate) fn detect_component_library(p: &HeuristicPatterns, text: &str) -> Option<Signal> {
    let (distinct, first) = count_distinct(&p.component_signatures, text);
    let confidence = tiered(
        distinct,
        COMPONENT_MANY,
        COMPONENT_SOME,
        Confidence::High,
        Confidence::Medium,
    )?;
    Some(Signal::new(
        "component_library",
        confidence,
        format!("shadcn/ui and Radix component signatures ({distinct} distinct)"),
        first.unwrap_or_default(),
    ))
}

/// Utility-class vocabulary; one family alone is not reported.
pub(crate) fn detect_utility_css(p: &HeuristicPatterns, html: &str) -> Option<Signal> {
    let (families, first) = count_distinct(&p.utility_css, html);
    if families < UTILITY_FAMILIES_MIN {
        return None;
    }
    Some(Signal::new(
        "utility_css",
        Confidence::Medium,
        format!("Utility-first CSS classes ({families} families)"),
        first.unwrap_or_default(),
    ))
}

/// Bundler output filenames, stronger when an SPA mount point is present.
pub(crate) fn detect_build_artifacts(p: &HeuristicPatterns, html: &str) -> Option<Signal> {
    let artifact = first_match(&p.build_artifacts, html)?;
    let (confidence, description) = if first_match(&p.spa_roots, html).is_some() {
        (
            Confidence::Medium,
            "Bundler output with single-page-app root element",
        )
    } else {
        (Confidence::Low, "Bundler output filenames")
    };
    Some(Signal::new("build_artifacts", confidence, description, artifact))
}

pub(crate) fn detect_icon_library(p: &HeuristicPatterns, text: &str) -> Option<Signal> {
    let matched = first_match(&p.icon_library, text)?;
    Some(Signal::new(
        "icon_library",
        Confidence::Medium,
        "Lucide/Heroicons icon library",
        matched,
    ))
}

pub(crate) fn detect_default_font(p: &HeuristicPatterns, html: &str) -> Option<Signal> {
    let matched = first_match(&p.default_font, html)?;
    Some(Signal::new(
        "default_font",
        Confidence::Low,
        "Inter used as the site font",
        matched,
    ))
}

/// Placeholder domains, emails and API paths; every occurrence counts.
pub(crate) fn detect_placeholder_links(p: &HeuristicPatterns, text: &str) -> Option<Signal> {
    let (count, first) = count_occurrences(&p.placeholder_links, text);
    let confidence = tiered(
        count,
        PLACEHOLDER_MANY,
        PLACEHOLDER_SOME,
        Confidence::High,
        Confidence::Medium,
    )?;
    Some(Signal::new(
        "placeholder_links",
        confidence,
        format!("Placeholder links or contact details ({count} found)"),
        first.unwrap_or_default(),
    ))
}

/// Numbered generic names inside class and id attributes.
pub(crate) fn detect_generic_naming(p: &HeuristicPatterns, html: &str) -> Option<Signal> {
    let mut count = 0;
    let mut first = None;
    for caps in p.class_or_id.captures_iter(html) {
        let Some(value) = caps.get(1) else {
            continue;
        };
        for m in p.generic_name.find_iter(value.as_str()) {
            count += 1;
            first.get_or_insert(m.as_str());
        }
    }
    let confidence = tiered(
        count,
        GENERIC_NAMING_MANY,
        GENERIC_NAMING_SOME,
        Confidence::Medium,
        Confidence::Low,
    )?;
    Some(Signal::new(
        "generic_naming",
        confidence,
        format!("Generic numbered class/id names ({count} found)"),
        first.unwrap_or_default(),
    ))
}

/// AI website builder named in `<meta name="generator">`; first match only.
pub(crate) fn detect_ai_generator(p: &HeuristicPatterns, html: &str) -> Option<Signal> {
    let m = p.ai_generator.find(html)?;
    Some(Signal::new(
        "ai_generator",
        Confidence::High,
        "AI website builder generator meta tag",
        m.as_str(),
    ))
}
