//! AI-assistant heuristics.
//!
//! A fixed battery of independent detectors looks for the stylistic residue AI
//! coding assistants tend to leave: explanatory comments, shadcn/Radix
//! component markup, utility CSS, bundler output, icon and font defaults,
//! placeholder links, numbered generic names, prototype hosting and AI builder
//! generator tags.
//!
//! Detectors that read script code also see the adjunct script bundle when one
//! was fetched; the rest only read the page HTML.

mod content;
mod hosting;
mod tables;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::PatternError;
use crate::fingerprint::{compile_content_pattern, compile_content_patterns};
use crate::models::{PageArtifacts, Signal};

use content::{
    detect_ai_generator, detect_build_artifacts, detect_component_library, detect_default_font,
    detect_generic_naming, detect_icon_library, detect_over_explanation,
    detect_placeholder_links, detect_utility_css,
};
use hosting::{detect_hosting_header, detect_prototype_hosting};
use tables::*;

/// Compiled regex tables for every content heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicPatterns {
    over_explained: Vec<Regex>,
    component_signatures: Vec<Regex>,
    utility_css: Vec<Regex>,
    build_artifacts: Vec<Regex>,
    spa_roots: Vec<Regex>,
    icon_library: Vec<Regex>,
    default_font: Vec<Regex>,
    placeholder_links: Vec<Regex>,
    class_or_id: Regex,
    generic_name: Regex,
    ai_generator: Regex,
}

impl HeuristicPatterns {
    /// Compiles every heuristic table.
    ///
    /// # Errors
    ///
    /// Returns the first `PatternError`, owned by the heuristic's name.
    pub fn compile() -> Result<Self, PatternError> {
        Ok(Self {
            over_explained: compile_content_patterns("over_explained_comments", OVER_EXPLAINED_PATTERNS)?,
            component_signatures: compile_content_patterns("component_library", COMPONENT_PATTERNS)?,
            utility_css: compile_content_patterns("utility_css", UTILITY_CSS_PATTERNS)?,
            build_artifacts: compile_content_patterns("build_artifacts", BUILD_ARTIFACT_PATTERNS)?,
            spa_roots: compile_content_patterns("build_artifacts", SPA_ROOT_PATTERNS)?,
            icon_library: compile_content_patterns("icon_library", ICON_LIBRARY_PATTERNS)?,
            default_font: compile_content_patterns("default_font", DEFAULT_FONT_PATTERNS)?,
            placeholder_links: compile_content_patterns("placeholder_links", PLACEHOLDER_PATTERNS)?,
            class_or_id: compile_content_pattern("generic_naming", CLASS_OR_ID_PATTERN)?,
            generic_name: compile_content_pattern("generic_naming", GENERIC_NAME_PATTERN)?,
            ai_generator: compile_content_pattern("ai_generator", AI_GENERATOR_PATTERN)?,
        })
    }
}

static PATTERNS: LazyLock<Result<HeuristicPatterns, PatternError>> =
    LazyLock::new(HeuristicPatterns::compile);

/// Returns the process-wide compiled heuristic tables.
pub fn heuristic_patterns() -> Result<&'static HeuristicPatterns, PatternError> {
    PATTERNS.as_ref().map_err(Clone::clone)
}

/// Runs every AI heuristic against a page.
///
/// # Arguments
///
/// * `patterns` - Compiled heuristic tables
/// * `artifacts` - Page HTML, headers and final hostname
/// * `script_bundle` - The adjunct script, if it was fetched
///
/// # Returns
///
/// The union of all detector signals; empty when nothing fired.
pub fn extract_ai_signals(
    patterns: &HeuristicPatterns,
    artifacts: &PageArtifacts,
    script_bundle: Option<&str>,
) -> Vec<Signal> {
    let html = artifacts.html.as_str();
    let combined: Cow<'_, str> = match script_bundle {
        Some(script) if !script.is_empty() => Cow::Owned(format!("{html}\n{script}")),
        _ => Cow::Borrowed(html),
    };

    let prototype_hosting = detect_prototype_hosting(&artifacts.hostname);
    let hosting_header = detect_hosting_header(artifacts, prototype_hosting.is_some());

    let signals: Vec<Signal> = [
        detect_over_explanation(patterns, &combined),
        detect_component_library(patterns, &combined),
        detect_utility_css(patterns, html),
        detect_build_artifacts(patterns, html),
        detect_icon_library(patterns, &combined),
        detect_default_font(patterns, html),
        detect_placeholder_links(patterns, &combined),
        detect_generic_naming(patterns, html),
        prototype_hosting,
        hosting_header,
        detect_ai_generator(patterns, html),
    ]
    .into_iter()
    .flatten()
    .collect();

    log::debug!(
        "AI heuristics on {}: {} signal(s) ({} bytes of script)",
        artifacts.hostname,
        signals.len(),
        script_bundle.map_or(0, str::len)
    );

    signals
}
