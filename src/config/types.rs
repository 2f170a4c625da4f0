//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_PAGE_TIMEOUT_SECS, DEFAULT_SCRIPT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, PIPELINE_TIMEOUT_MARGIN_SECS, URL_PROCESSING_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Detector configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// with `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use site_origin::Config;
///
/// let config = Config {
///     urls: vec!["example.com".to_string()],
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "site_origin",
    version,
    about = "Classifies whether a website was built with a site builder, an AI coding assistant, or by hand"
)]
pub struct Config {
    /// URLs or bare hostnames to analyze
    pub urls: Vec<String>,

    /// File to read URLs from (one per line, `#` starts a comment)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Maximum number of URLs analyzed concurrently
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Page fetch timeout in seconds
    ///
    /// Each URL's whole pipeline is bounded by page + script timeout + 5s,
    /// and never less than 30s.
    #[arg(long, default_value_t = DEFAULT_PAGE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Script bundle fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_SCRIPT_TIMEOUT_SECS)]
    pub script_timeout_seconds: u64,

    /// Skip fetching the page's script bundle (HTML-only heuristics)
    #[arg(long)]
    pub no_script_fetch: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    /// Page fetch timeout as a `Duration`.
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Script bundle fetch timeout as a `Duration`.
    pub fn script_timeout(&self) -> Duration {
        Duration::from_secs(self.script_timeout_seconds)
    }

    /// Bound on one URL's whole pipeline.
    ///
    /// Page timeout plus script timeout plus a margin, never below
    /// `URL_PROCESSING_TIMEOUT`, so raising `--timeout-seconds` is honored.
    pub fn pipeline_timeout(&self) -> Duration {
        let derived = Duration::from_secs(
            self.timeout_seconds
                .saturating_add(self.script_timeout_seconds)
                .saturating_add(PIPELINE_TIMEOUT_MARGIN_SECS),
        );
        derived.max(URL_PROCESSING_TIMEOUT)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_PAGE_TIMEOUT_SECS,
            script_timeout_seconds: DEFAULT_SCRIPT_TIMEOUT_SECS,
            no_script_fetch: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.urls.is_empty());
        assert_eq!(config.max_concurrency, 10);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.script_timeout_seconds, 5);
        assert!(!config.no_script_fetch);
        assert_eq!(config.script_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_pipeline_timeout_follows_fetch_timeouts() {
        assert_eq!(Config::default().pipeline_timeout(), URL_PROCESSING_TIMEOUT);

        let slow = Config {
            timeout_seconds: 60,
            script_timeout_seconds: 20,
            ..Default::default()
        };
        assert_eq!(slow.pipeline_timeout(), Duration::from_secs(85));

        let huge = Config {
            timeout_seconds: u64::MAX,
            ..Default::default()
        };
        assert_eq!(huge.pipeline_timeout(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_config_parses_cli_arguments() {
        let config = Config::parse_from([
            "site_origin",
            "example.com",
            "https://demo.webflow.io",
            "--max-concurrency",
            "3",
            "--no-script-fetch",
            "--log-format",
            "json",
        ]);
        assert_eq!(config.urls.len(), 2);
        assert_eq!(config.max_concurrency, 3);
        assert!(config.no_script_fetch);
        assert!(matches!(config.log_format, LogFormat::Json));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_config_parses_file_option() {
        let config = Config::parse_from(["site_origin", "--file", "urls.txt"]);
        assert!(config.urls.is_empty());
        assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
    }
}
