//! `reqwest`-backed fetcher.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use super::{FetchedPage, PageFetcher};
use crate::config::{Config, MAX_RESPONSE_BODY_SIZE, MAX_SCRIPT_BUNDLE_SIZE};
use crate::error_handling::FetchError;

/// Fetches pages and scripts over HTTP.
///
/// The client carries the user agent and redirect policy; per-request
/// timeouts and body ceilings live here.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    page_timeout: Duration,
    script_timeout: Duration,
    page_limit: usize,
    script_limit: usize,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            page_timeout: config.page_timeout(),
            script_timeout: config.script_timeout(),
            page_limit: MAX_RESPONSE_BODY_SIZE,
            script_limit: MAX_SCRIPT_BUNDLE_SIZE,
        }
    }

    /// Overrides the body ceilings.
    pub fn with_limits(mut self, page_limit: usize, script_limit: usize) -> Self {
        self.page_limit = page_limit;
        self.script_limit = script_limit;
        self
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
            .timeout(self.page_timeout)
            .send()
            .await?;

        let final_url = response.url().clone();
        let status = response.status().as_u16();
        let headers = header_map(response.headers());

        if !response.status().is_success() {
            log::debug!("{url} answered {status}; analyzing body anyway");
        }

        let (body, truncated) = read_capped(response, self.page_limit).await?;
        if truncated {
            log::debug!("Page body of {final_url} truncated at {} bytes", self.page_limit);
        }

        Ok(FetchedPage {
            final_url,
            status,
            headers,
            html: String::from_utf8_lossy(&body).into_owned(),
        })
    }

    async fn fetch_script(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(self.script_timeout)
            .send()
            .await?
            .error_for_status()?;

        let (body, truncated) = read_capped(response, self.script_limit).await?;
        if truncated {
            log::debug!("Script {url} truncated at {} bytes", self.script_limit);
        }
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Copies response headers into a map keyed by lower-cased name.
///
/// Non-UTF-8 values are skipped; repeated headers keep the first value.
fn header_map(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::with_capacity(headers.len());
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            map.entry(name.as_str().to_ascii_lowercase())
                .or_insert_with(|| value.to_string());
        }
    }
    map
}

/// Reads a response body up to `limit` bytes.
///
/// Returns the bytes read and whether the body was cut short.
async fn read_capped(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<(Vec<u8>, bool), reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let remaining = limit.saturating_sub(body.len());
        if chunk.len() > remaining {
            body.extend_from_slice(&chunk[..remaining]);
            return Ok((body, true));
        }
        body.extend_from_slice(&chunk);
    }
    Ok((body, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(reqwest::Client::new(), &Config::default())
    }

    fn server_url(server: &MockServer, route: &str) -> Url {
        Url::parse(&format!("{}{route}", server.uri())).unwrap()
    }

    async fn serve(server: &MockServer, route: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body_and_lowercased_headers() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/",
            ResponseTemplate::new(200)
                .insert_header("Server", "Pepyaka/1.19.10")
                .insert_header("X-Wix-Request-Id", "1700000000.123")
                .set_body_string("<html><body>hi</body></html>"),
        )
        .await;

        let page = fetcher().fetch_page(&server_url(&server, "/")).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.html, "<html><body>hi</body></html>");
        assert_eq!(page.headers.get("server").map(String::as_str), Some("Pepyaka/1.19.10"));
        assert!(page.headers.contains_key("x-wix-request-id"));
    }

    #[tokio::test]
    async fn test_fetch_page_keeps_non_success_body() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/gone",
            ResponseTemplate::new(404).set_body_string("<html>not found</html>"),
        )
        .await;

        let page = fetcher()
            .fetch_page(&server_url(&server, "/gone"))
            .await
            .unwrap();
        assert_eq!(page.status, 404);
        assert!(page.html.contains("not found"));
    }

    #[tokio::test]
    async fn test_fetch_page_follows_redirect() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/old",
            ResponseTemplate::new(301).insert_header("Location", format!("{}/new", server.uri())),
        )
        .await;
        serve(&server, "/new", ResponseTemplate::new(200).set_body_string("moved")).await;

        let page = fetcher()
            .fetch_page(&server_url(&server, "/old"))
            .await
            .unwrap();
        assert_eq!(page.final_url.path(), "/new");
        assert_eq!(page.html, "moved");
    }

    #[tokio::test]
    async fn test_page_body_is_truncated_at_limit() {
        let server = MockServer::start().await;
        serve(&server, "/big", ResponseTemplate::new(200).set_body_string("x".repeat(4096))).await;

        let page = fetcher()
            .with_limits(1000, 1000)
            .fetch_page(&server_url(&server, "/big"))
            .await
            .unwrap();
        assert_eq!(page.html.len(), 1000);
    }

    #[tokio::test]
    async fn test_fetch_script_rejects_error_status() {
        let server = MockServer::start().await;
        serve(&server, "/app.js", ResponseTemplate::new(500)).await;

        let result = fetcher().fetch_script(&server_url(&server, "/app.js")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_script_bounded() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/assets/index-abc.js",
            ResponseTemplate::new(200).set_body_string("a".repeat(5000)),
        )
        .await;

        let script = fetcher()
            .with_limits(10_000, 2048)
            .fetch_script(&server_url(&server, "/assets/index-abc.js"))
            .await
            .unwrap();
        assert_eq!(script.len(), 2048);
    }

    /// An address nothing listens on: bind an ephemeral port, then release it.
    fn closed_port_url() -> Url {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        Url::parse(&format!("http://{addr}/")).unwrap()
    }

    #[tokio::test]
    async fn test_closed_port_is_fetch_error() {
        let url = closed_port_url();

        let err = fetcher().fetch_page(&url).await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Connect(_) | FetchError::Request(_) | FetchError::Timeout(_)
        ));
    }
}
