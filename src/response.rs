//! HTTP-style response envelope for the log endpoint.
//!
//! [`LogResponse`] maps the outcome of [`LogService::fetch_logs`] onto the
//! status codes and JSON bodies a log viewer expects. It carries no server:
//! embedders hand the fields to whatever HTTP framework they run.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | records | 200 | JSON array of records |
//! | identifier missing | 400 | `{"error":"Bad Request"}` |
//! | malformed identifier, transcript unavailable | 404 | `{"error":"Not Found"}` |
//! | anything else | 500 | `{"error":"Internal Server Error"}` |

use serde::Serialize;
use tracing::error;

use crate::error::{ModlogError, Result};
use crate::record::MessageRecord;
use crate::service::LogService;
use crate::sources::TranscriptSource;

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// A status code, content type and body, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl LogResponse {
    /// 200 with the records as a JSON array. Falls back to a 500 if the
    /// records cannot be serialized.
    pub fn ok(records: &[MessageRecord]) -> Self {
        match serde_json::to_string(records) {
            Ok(body) => Self {
                status: STATUS_OK,
                content_type: CONTENT_TYPE_JSON,
                body,
            },
            Err(e) => {
                error!(error = %e, "failed to serialize records");
                Self::error(STATUS_INTERNAL_ERROR)
            }
        }
    }

    /// An error response with the canonical reason phrase for `status`.
    pub fn error(status: u16) -> Self {
        let reason = match status {
            STATUS_BAD_REQUEST => "Bad Request",
            STATUS_NOT_FOUND => "Not Found",
            _ => "Internal Server Error",
        };
        let body = serde_json::to_string(&ErrorBody { error: reason })
            .unwrap_or_else(|_| format!(r#"{{"error":"{reason}"}}"#));
        Self {
            status,
            content_type: CONTENT_TYPE_JSON,
            body,
        }
    }

    pub fn bad_request() -> Self {
        Self::error(STATUS_BAD_REQUEST)
    }

    /// Maps a fetch outcome onto a response.
    pub fn from_result(result: Result<Vec<MessageRecord>>) -> Self {
        match result {
            Ok(records) => Self::ok(&records),
            Err(e) => Self::error(status_for(&e)),
        }
    }

    /// Handles one request for `identifier`, which is `None` when the
    /// caller supplied no identifier at all.
    pub fn handle<S: TranscriptSource>(identifier: Option<&str>, service: &LogService<S>) -> Self {
        match identifier {
            None => Self::bad_request(),
            Some(id) => Self::from_result(service.fetch_logs(id)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// HTTP status for an error: 404 for the not-found class, 500 otherwise.
pub fn status_for(error: &ModlogError) -> u16 {
    if error.is_not_found() {
        STATUS_NOT_FOUND
    } else {
        STATUS_INTERNAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::RetrievalAddress;
    use crate::sources::MemorySource;
    use std::io;

    fn service() -> LogService<MemorySource> {
        let source = MemorySource::new().with_transcript(
            RetrievalAddress::new(0xa, 0xb, 0xc),
            "[2023-01-01 12:00:00] Alice#1234 (User): hi",
        );
        LogService::new(source)
    }

    #[test]
    fn test_success_is_json_array() {
        let response = LogResponse::handle(Some("a-b-c"), &service());
        assert_eq!(response.status, 200);
        assert!(response.is_success());
        assert_eq!(response.content_type, "application/json");

        let records: Vec<MessageRecord> = serde_json::from_str(&response.body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "hi");
    }

    #[test]
    fn test_empty_records_is_empty_array() {
        let response = LogResponse::ok(&[]);
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "[]");
    }

    #[test]
    fn test_missing_identifier_is_bad_request() {
        let response = LogResponse::handle(None, &service());
        assert_eq!(response.status, 400);
        assert_eq!(response.body, r#"{"error":"Bad Request"}"#);
    }

    #[test]
    fn test_malformed_and_missing_are_not_found() {
        for id in ["zz-1-2", "1-2", "1-2-3"] {
            let response = LogResponse::handle(Some(id), &service());
            assert_eq!(response.status, 404, "{id}");
            assert_eq!(response.body, r#"{"error":"Not Found"}"#);
            assert_eq!(response.content_type, "application/json");
        }
    }

    #[test]
    fn test_internal_errors_are_500() {
        let err = ModlogError::Io(io::Error::other("disk"));
        let response = LogResponse::from_result(Err(err));
        assert_eq!(response.status, 500);
        assert_eq!(response.body, r#"{"error":"Internal Server Error"}"#);

        assert_eq!(status_for(&ModlogError::too_large(1, 2)), 500);
    }
}
