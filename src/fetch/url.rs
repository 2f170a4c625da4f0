//! Input URL normalization.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Turns user input into an absolute http(s) URL.
///
/// Bare hostnames get an `https://` prefix. Input is trimmed first; anything
/// longer than `MAX_URL_LENGTH`, unparseable, host-less, or on another scheme
/// is rejected.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` describing why the input was rejected.
pub fn normalize_url(input: &str) -> Result<Url, FetchError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FetchError::InvalidUrl("empty URL".to_string()));
    }

    let normalized = if has_scheme(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(FetchError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {MAX_URL_LENGTH})",
            normalized.len()
        )));
    }

    let parsed = Url::parse(&normalized)
        .map_err(|e| FetchError::InvalidUrl(format!("{input}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{other}' in {input}"
            )))
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl(format!("missing host in {input}")));
    }

    Ok(parsed)
}

/// True when `input` starts with `scheme://`.
///
/// A `://` later in the path or query (e.g. `?next=https://...`) does not count.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
