//! Fetch adapter.
//!
//! Retrieves the target page and, optionally, one linked script bundle. The
//! detection engine only sees the `PageFetcher` trait, so tests can substitute
//! a fetcher that never touches the network.

mod http;
mod script;
mod url;

use std::collections::HashMap;
use std::future::Future;

use crate::error_handling::FetchError;

pub use self::http::HttpFetcher;
pub use self::script::discover_script_url;
pub use self::url::normalize_url;

/// A fetched page, ready for analysis.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after following redirects
    pub final_url: ::url::Url,
    /// HTTP status; non-2xx pages are still analyzed
    pub status: u16,
    /// Response headers keyed by lower-cased name
    pub headers: HashMap<String, String>,
    /// Body decoded as UTF-8 (lossy), bounded by the page size limit
    pub html: String,
}

/// Source of page and script content.
pub trait PageFetcher: Send + Sync {
    /// Fetches the primary page. Any failure here makes the result `unknown`.
    fn fetch_page(
        &self,
        url: &::url::Url,
    ) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;

    /// Fetches the adjunct script bundle.
    fn fetch_script(
        &self,
        url: &::url::Url,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}
