//! Error types for the analyzer frontend.
//!
//! Two error families cover the widget:
//!
//! - [`ValidationError`] - a rejected file selection, recovered locally and
//!   never sent to the network layer
//! - [`AnalyzeError`] - a failed analysis request (transport, status or
//!   response shape)
//!
//! Error strings are diagnostic payloads for the console log; user-facing
//! text lives in [`crate::messages`] and is looked up from the error kind,
//! never from these strings.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// A file selection rejected before any request is made.
///
/// Produced by [`crate::validation::validate_selection`]; checks run in
/// declaration order and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Declared media type is not an image category.
    #[error("declared media type `{0}` is not an image")]
    NotAnImage(String),

    /// File name does not end in an accepted image extension.
    #[error("file name `{0}` does not end in an accepted image extension")]
    BadExtension(String),

    /// File exceeds the configured size limit.
    #[error("file of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}

// =============================================================================
// Analysis Request Errors
// =============================================================================

/// A failed analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Transport failure, non-2xx status or timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for analysis request operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_format() {
        let err = ValidationError::TooLarge {
            size: 3_000_000,
            limit: 2_097_152,
        };
        let msg = err.to_string();
        assert!(msg.contains("3000000"));
        assert!(msg.contains("2097152"));
    }

    #[test]
    fn test_analyze_error_format() {
        let err = AnalyzeError::Network("server returned status 500".to_string());
        assert!(err.to_string().contains("500"));

        let err = AnalyzeError::Decode("expected a sequence".to_string());
        assert!(err.to_string().starts_with("decode error"));
    }
}
