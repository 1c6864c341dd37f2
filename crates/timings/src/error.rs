//! Error types for the timings registry.

use thiserror::Error;

/// Errors that can occur when building a timings registry.
///
/// Construction is the only fallible point; every lifecycle and read
/// operation afterwards degrades gracefully instead of failing, so a broken
/// measurement can never abort the operation being measured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingsError {
    /// The identifier list passed at construction contained a repeat
    #[error("Duplicate timing identifier: {0}")]
    DuplicateId(String),
}

/// Result type for timings construction.
pub type TimingsResult<T> = Result<T, TimingsError>;
