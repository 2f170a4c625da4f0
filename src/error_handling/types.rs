//! Error type definitions.
//!
//! This module defines all error types used throughout the detector.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A pattern in the fingerprint library or heuristic tables failed to compile.
///
/// Patterns are static configuration, so this is a defect in the data rather
/// than a condition the detector recovers from. The compiled libraries surface
/// it on first access so the binary can refuse to start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid pattern for {owner} ({pattern}): {message}")]
pub struct PatternError {
    /// Platform name or heuristic that owns the pattern
    pub owner: String,
    /// The offending pattern source
    pub pattern: String,
    /// Compiler message from the regex engine
    pub message: String,
}

/// Error types for page and script fetches.
///
/// The `Display` form of this error is what ends up in a detection result's
/// `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The input could not be turned into an http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete before its timeout.
    #[error("HTTP request timeout: {0}")]
    Timeout(String),

    /// TCP/TLS connection could not be established.
    #[error("HTTP connect error: {0}")]
    Connect(String),

    /// Too many redirects or an invalid redirect target.
    #[error("HTTP redirect error: {0}")]
    Redirect(String),

    /// The response body could not be read or decoded.
    #[error("HTTP body error: {0}")]
    Body(String),

    /// Any other request failure.
    #[error("HTTP request error: {0}")]
    Request(String),
}
