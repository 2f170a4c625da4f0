//! Header-based platform detection.
//!
//! Each header entry names the header it inspects; lookup is case-insensitive
//! by name and the pattern is matched case-insensitively against the value.
//! Presence-only rules use the pattern `^`.

use std::collections::HashMap;

use crate::fingerprint::models::PatternGroup;
use crate::models::Signal;

/// Checks all header entries of a group against the response headers.
///
/// `headers` must be keyed by lower-cased header name.
pub(crate) fn check_headers(group: &PatternGroup, headers: &HashMap<String, String>) -> Vec<Signal> {
    let category = group.category.signal_category();
    let mut results = Vec::new();

    for entry in &group.entries {
        let Some(header_name) = entry.header.as_deref() else {
            continue;
        };
        let Some(value) = headers.get(header_name) else {
            continue;
        };
        if entry.regex.is_match(value) {
            results.push(Signal::new(
                category,
                entry.confidence,
                &entry.description,
                &format!("{header_name}: {value}"),
            ));
        }
    }

    results
}
