//! Platform detection using the built-in fingerprint library.
//!
//! Fingerprints are static data (`library.rs`) compiled once per process. A
//! malformed pattern is a defect in that data, so the compiled library is held
//! as a `Result` and every accessor reports the same `PatternError`; callers
//! resolve it at startup and refuse to run if it fails.

mod detection;
mod library;
mod models;
mod patterns;

use std::sync::LazyLock;

use crate::error_handling::PatternError;

pub use detection::{match_fingerprint, match_library, PlatformMatch};
pub use library::PLATFORM_FINGERPRINTS;
pub use models::{
    Fingerprint, FingerprintLibrary, FingerprintSpec, HeaderSpec, PatternCategory, PatternEntry,
    PatternGroup, PatternSpec,
};
pub use patterns::{TagScanner, TagUrl};

pub(crate) use library::generator_meta;
pub(crate) use patterns::{compile_content_pattern, compile_content_patterns};

static LIBRARY: LazyLock<Result<FingerprintLibrary, PatternError>> =
    LazyLock::new(|| FingerprintLibrary::compile(PLATFORM_FINGERPRINTS));

static TAG_SCANNER: LazyLock<Result<TagScanner, PatternError>> = LazyLock::new(TagScanner::new);

/// Returns the process-wide compiled fingerprint library.
///
/// # Errors
///
/// Returns the `PatternError` of the first malformed built-in pattern.
pub fn fingerprint_library() -> Result<&'static FingerprintLibrary, PatternError> {
    LIBRARY.as_ref().map_err(Clone::clone)
}

/// Returns the process-wide script/link/img URL scanner.
pub fn tag_scanner() -> Result<&'static TagScanner, PatternError> {
    TAG_SCANNER.as_ref().map_err(Clone::clone)
}
