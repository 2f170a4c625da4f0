//! Adjunct script discovery.
//!
//! Picks the one script worth downloading for the AI heuristics: a bundler
//! entry chunk when the page has one, otherwise the first same-host `.js`.

use url::Url;

use crate::fingerprint::TagUrl;

/// Path fragments of common bundler entry chunks.
const BUNDLE_MARKERS: &[&str] = &[
    "/assets/index-",
    "/_next/static/",
    "/static/js/main.",
    "/_astro/",
    "/build/bundle",
];

fn looks_like_bundle(tag: &TagUrl) -> bool {
    tag.is_module || BUNDLE_MARKERS.iter().any(|marker| tag.url.contains(marker))
}

fn resolve(base: &Url, raw: &str) -> Option<Url> {
    let url = base.join(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Finds the script bundle to fetch for a page.
///
/// # Arguments
///
/// * `tags` - Tag URLs scanned from the page HTML
/// * `page_url` - Final page URL, used to resolve relative paths
///
/// # Returns
///
/// The resolved script URL, or `None` if the page has no suitable script.
pub fn discover_script_url(tags: &[TagUrl], page_url: &Url) -> Option<Url> {
    let scripts = || tags.iter().filter(|tag| tag.tag == "script");

    if let Some(url) = scripts()
        .filter(|tag| looks_like_bundle(tag))
        .find_map(|tag| resolve(page_url, &tag.url))
    {
        return Some(url);
    }

    scripts()
        .filter_map(|tag| resolve(page_url, &tag.url))
        .find(|url| url.host_str() == page_url.host_str() && url.path().ends_with(".js"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(url: &str, is_module: bool) -> TagUrl {
        TagUrl {
            tag: "script".to_string(),
            url: url.to_string(),
            is_module,
        }
    }

    fn page() -> Url {
        Url::parse("https://www.startup.io/pricing/").unwrap()
    }

    #[test]
    fn test_prefers_bundler_chunk() {
        let tags = vec![
            script("/js/analytics.js", false),
            script("/assets/index-Bq9XzK1d.js", false),
        ];
        let url = discover_script_url(&tags, &page()).unwrap();
        assert_eq!(url.as_str(), "https://www.startup.io/assets/index-Bq9XzK1d.js");
    }

    #[test]
    fn test_module_script_counts_as_bundle() {
        let tags = vec![
            script("/js/a.js", false),
            script("https://cdn.other.com/app.mjs", true),
        ];
        let url = discover_script_url(&tags, &page()).unwrap();
        assert_eq!(url.host_str(), Some("cdn.other.com"));
    }

    #[test]
    fn test_falls_back_to_first_same_host_js() {
        let tags = vec![
            script("https://www.googletagmanager.com/gtag/js?id=G-1", false),
            script("https://cdn.other.com/lib.js", false),
            script("app.js", false),
        ];
        let url = discover_script_url(&tags, &page()).unwrap();
        assert_eq!(url.as_str(), "https://www.startup.io/pricing/app.js");
    }

    #[test]
    fn test_ignores_non_script_tags() {
        let tags = vec![TagUrl {
            tag: "link".to_string(),
            url: "/assets/index-abcdefgh.css".to_string(),
            is_module: false,
        }];
        assert!(discover_script_url(&tags, &page()).is_none());
    }

    #[test]
    fn test_no_scripts() {
        assert!(discover_script_url(&[], &page()).is_none());
    }
}
