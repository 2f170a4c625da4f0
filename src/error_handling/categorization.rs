//! Error categorization.
//!
//! Maps `reqwest` failures onto the `FetchError` taxonomy and renders a bounded,
//! sanitized message for the detection result.

use std::error::Error as StdError;

use super::types::FetchError;
use crate::utils::sanitize_and_truncate_error_message;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// The message includes the full source chain (reqwest's own `Display` stops at
/// the outermost layer, which hides DNS and TLS causes).
pub(crate) fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    let message = sanitize_and_truncate_error_message(&error_chain_message(error));

    if error.is_timeout() {
        FetchError::Timeout(message)
    } else if error.is_connect() {
        FetchError::Connect(message)
    } else if error.is_redirect() {
        FetchError::Redirect(message)
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(message)
    } else if error.is_builder() {
        FetchError::InvalidUrl(message)
    } else {
        FetchError::Request(message)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        categorize_reqwest_error(&error)
    }
}

/// Joins an error and its sources with `": "`.
fn error_chain_message(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // hyper and reqwest often repeat the inner message verbatim
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
