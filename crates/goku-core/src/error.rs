//! Error types for the goku.sx scraper
//!
//! This module defines all error types used throughout the library.
//! None of them are recovered internally: any failure aborts the pipeline
//! that hit it (opt-in tolerant mode excepted, see `pipeline`).

use thiserror::Error;

/// Error type for scraper operations
#[derive(Error, Debug)]
pub enum GokuError {
    /// HTTP request failed (network error or non-success status)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Required HTML element was not found where the page structure demands one
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Detail page carries an unusable number of value elements
    #[error("Malformed page: {0}")]
    MalformedPage(String),

    /// Info block on a listing card lacks the expected segment
    #[error("Failed to parse info block: {0}")]
    ParseError(String),

    /// CSV encoding or write failure
    #[error("CSV write failed: {0}")]
    CsvError(#[from] csv::Error),

    /// Filesystem failure while writing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, GokuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display() {
        let error = GokuError::ElementNotFound("a.movie-link".to_string());
        assert_eq!(error.to_string(), "Element not found: a.movie-link");
    }

    #[test]
    fn test_malformed_page_display() {
        let error = GokuError::MalformedPage("expected 4 value elements, found 2".to_string());
        assert_eq!(
            error.to_string(),
            "Malformed page: expected 4 value elements, found 2"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let error = GokuError::ParseError("missing duration segment".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to parse info block: missing duration segment"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = GokuError::from(io);
        assert!(matches!(error, GokuError::IoError(_)));
        assert!(error.to_string().contains("denied"));
    }
}
