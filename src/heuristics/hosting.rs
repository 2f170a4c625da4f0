//! Hosting-provider heuristics.
//!
//! A zero-config provider subdomain and a provider response header point to
//! the same inference, so the header signal is only emitted when the hostname
//! check stayed silent.

use super::tables::{HOSTING_HEADERS, PROTOTYPE_HOSTS};
use crate::models::{Confidence, PageArtifacts, Signal};

/// Final hostname ends with a known prototype-hosting suffix.
pub(crate) fn detect_prototype_hosting(hostname: &str) -> Option<Signal> {
    let hostname = hostname.to_ascii_lowercase();
    let (_, provider) = PROTOTYPE_HOSTS
        .iter()
        .find(|(suffix, _)| hostname.ends_with(suffix))?;
    Some(Signal::new(
        "prototype_hosting",
        Confidence::Medium,
        format!("Hosted on a {provider} deployment subdomain"),
        &hostname,
    ))
}

/// Provider header present on a custom domain.
pub(crate) fn detect_hosting_header(
    artifacts: &PageArtifacts,
    prototype_hosting_fired: bool,
) -> Option<Signal> {
    if prototype_hosting_fired {
        return None;
    }
    HOSTING_HEADERS.iter().find_map(|(header, provider)| {
        artifacts.header(header).map(|value| {
            Signal::new(
                "hosting_header",
                Confidence::Low,
                format!("Served by {provider}"),
                &format!("{header}: {value}"),
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prototype_hosting_suffix_match() {
        let signal = detect_prototype_hosting("my-app-7x2k.vercel.app").unwrap();
        assert_eq!(signal.category, "prototype_hosting");
        assert_eq!(signal.confidence, Confidence::Medium);
        assert!(signal.description.contains("Vercel"));
    }

    #[test]
    fn test_prototype_hosting_is_case_insensitive() {
        assert!(detect_prototype_hosting("Demo.Netlify.APP").is_some());
    }

    #[test]
    fn test_prototype_hosting_requires_exact_suffix() {
        assert!(detect_prototype_hosting("vercel.app.example.com").is_none());
        assert!(detect_prototype_hosting("notvercel.app").is_none());
        assert!(detect_prototype_hosting("www.example.com").is_none());
    }

    #[test]
    fn test_hosting_header_on_custom_domain() {
        let artifacts = PageArtifacts::new(
            "",
            [("X-Vercel-Id", "iad1::abcde-123")],
            "www.startup.io",
        );
        let signal = detect_hosting_header(&artifacts, false).unwrap();
        assert_eq!(signal.confidence, Confidence::Low);
        assert_eq!(signal.matched_value, "x-vercel-id: iad1::abcde-123");
    }

    #[test]
    fn test_hosting_header_suppressed_after_subdomain_signal() {
        let artifacts = PageArtifacts::new("", [("x-vercel-id", "iad1")], "app.vercel.app");
        assert!(detect_hosting_header(&artifacts, true).is_none());
    }
}
