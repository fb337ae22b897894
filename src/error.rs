//! Unified error types for modlog.
//!
//! This module provides a single [`ModlogError`] enum that covers all error
//! cases in the library, in the style of `reqwest`, `serde_json` and `csv`.
//!
//! # Outcome classes
//!
//! Callers that only need the coarse outcome should use
//! [`ModlogError::is_not_found`]:
//!
//! - **Not found**: the identifier could not be resolved, or the transcript it
//!   points to does not exist ([`MalformedIdentifier`](ModlogError::MalformedIdentifier),
//!   [`TranscriptUnavailable`](ModlogError::TranscriptUnavailable))
//! - **Internal**: everything else (I/O, transport, serialization)
//!
//! The transcript parser itself never produces an error.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for modlog operations.
///
/// # Example
///
/// ```rust
/// use modlog::error::Result;
/// use modlog::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ModlogError>;

/// The error type for all modlog operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModlogError {
    /// The opaque log identifier could not be decoded.
    ///
    /// This occurs when:
    /// - The identifier does not split into exactly three `-` separated segments
    /// - A segment is empty or contains non-hexadecimal characters
    /// - A segment does not fit in a signed 64-bit integer
    #[error("Malformed log identifier '{identifier}': {reason}")]
    MalformedIdentifier {
        /// The identifier as supplied by the caller
        identifier: String,
        /// What was wrong with it
        reason: String,
    },

    /// The transcript for a resolved address does not exist or could not be
    /// retrieved.
    #[error("Transcript {address} unavailable: {reason}")]
    TranscriptUnavailable {
        /// Decimal rendering of the retrieval address
        address: String,
        /// Description of the failure
        reason: String,
    },

    /// The transcript exceeds the configured size limit.
    #[error("Transcript too large: {actual_size} bytes (maximum: {max_size} bytes)")]
    TranscriptTooLarge {
        /// Maximum allowed size in bytes
        max_size: usize,
        /// Actual size encountered
        actual_size: usize,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP transport error while reading a transcript body.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A value did not match the expected format (output format names,
    /// roles, content-store URLs).
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ModlogError {
    /// Creates a malformed identifier error.
    pub fn malformed_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        ModlogError::MalformedIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Creates a transcript unavailable error.
    pub fn unavailable(address: impl ToString, reason: impl Into<String>) -> Self {
        ModlogError::TranscriptUnavailable {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a transcript size error.
    pub fn too_large(max_size: usize, actual_size: usize) -> Self {
        ModlogError::TranscriptTooLarge {
            max_size,
            actual_size,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ModlogError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ModlogError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this error belongs to the "not found" class.
    ///
    /// Both an unresolvable identifier and a missing transcript are reported
    /// to callers as the same outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ModlogError::MalformedIdentifier { .. } | ModlogError::TranscriptUnavailable { .. }
        )
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ModlogError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ModlogError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ModlogError::InvalidDate { .. })
    }
}
