//! Utilities for sanitizing and bounding strings.
//!
//! Removes control characters from error messages and caps the length of
//! strings carried in detection results (error messages, matched values).

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when serialized or displayed in logs. This function removes them
/// while preserving readability.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH`.
///
/// Appends a truncation note with the original length when the message was cut.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let max = crate::config::MAX_ERROR_MESSAGE_LENGTH;
    let char_count = sanitized.chars().count();

    if char_count > max {
        // Leave room for the truncation note
        let keep = max.saturating_sub(50);
        format!(
            "{}... (truncated, original length: {} chars)",
            truncate_chars(&sanitized, keep),
            char_count
        )
    } else {
        sanitized
    }
}

/// Returns at most `max_chars` characters of `text`.
///
/// Cuts on a character boundary, never inside a multi-byte sequence.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
