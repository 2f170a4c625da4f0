//! HTTP client initialization.

use std::time::Duration;

use reqwest::{redirect, ClientBuilder};

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;

/// Builds the shared HTTP client.
///
/// Redirects are followed up to `MAX_REDIRECT_HOPS`. The client-wide timeout
/// is the page timeout; script requests tighten it per request.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or client
/// configuration cannot be initialized.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(config.page_timeout())
        .connect_timeout(config.page_timeout().min(Duration::from_secs(5)))
        .redirect(redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
