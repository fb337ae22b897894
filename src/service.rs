//! Identifier-to-records pipeline.
//!
//! [`LogService`] is the single entry point used by callers that start from a
//! published log identifier:
//!
//! ```text
//! identifier -> resolve -> RetrievalAddress -> source.fetch -> text -> parse -> records
//! ```
//!
//! Failures are reported once and immediately. A malformed identifier never
//! reaches the source, and a failed fetch never reaches the parser.
//!
//! ```rust
//! use modlog::address::resolve;
//! use modlog::service::LogService;
//! use modlog::sources::MemorySource;
//!
//! # fn main() -> modlog::Result<()> {
//! let address = resolve("a-b-c")?;
//! let source = MemorySource::new()
//!     .with_transcript(address, "[2023-01-01 12:00:00] Alice#1234 (User): hi");
//!
//! let service = LogService::new(source);
//! let records = service.fetch_logs("a-b-c")?;
//! assert_eq!(records[0].username, "Alice");
//!
//! assert!(service.fetch_logs("not-an-id").unwrap_err().is_not_found());
//! # Ok(())
//! # }
//! ```

use tracing::{debug, info, warn};

use crate::address::resolve;
use crate::error::Result;
use crate::record::MessageRecord;
use crate::sources::TranscriptSource;
use crate::transcript::TranscriptParser;

/// Resolves identifiers, fetches transcripts and parses them.
#[derive(Debug, Clone)]
pub struct LogService<S> {
    source: S,
    parser: TranscriptParser,
}

impl<S: TranscriptSource> LogService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            parser: TranscriptParser::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the records of the transcript behind `identifier`.
    ///
    /// # Errors
    ///
    /// - [`MalformedIdentifier`](crate::ModlogError::MalformedIdentifier) if
    ///   the identifier does not resolve
    /// - whatever the source reports, typically
    ///   [`TranscriptUnavailable`](crate::ModlogError::TranscriptUnavailable)
    pub fn fetch_logs(&self, identifier: &str) -> Result<Vec<MessageRecord>> {
        let address = resolve(identifier).inspect_err(|e| {
            debug!(identifier, error = %e, "identifier rejected");
        })?;

        let text = self.source.fetch(&address).inspect_err(|e| {
            warn!(
                identifier,
                address = %address,
                source = self.source.name(),
                error = %e,
                "transcript fetch failed"
            );
        })?;

        let records = self.parser.parse(&text);
        info!(
            identifier,
            address = %address,
            source = self.source.name(),
            records = records.len(),
            "transcript served"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::RetrievalAddress;
    use crate::error::ModlogError;
    use crate::sources::MemorySource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches so tests can check the source is bypassed.
    struct CountingSource {
        inner: MemorySource,
        calls: AtomicUsize,
    }

    impl TranscriptSource for CountingSource {
        fn name(&self) -> &'static str {
            "Counting"
        }

        fn fetch(&self, address: &RetrievalAddress) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch(address)
        }
    }

    fn counting(inner: MemorySource) -> LogService<CountingSource> {
        LogService::new(CountingSource {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_fetch_logs_success() {
        let address = RetrievalAddress::new(0x10, 0x20, 0x30);
        let text = "[2023-01-01 12:00:00] Alice#1234 (User): hello\n\
                    [2023-01-01 12:00:05] Mod#0001 (Staff): hi";
        let service = LogService::new(MemorySource::new().with_transcript(address, text));

        let records = service.fetch_logs("10-20-30").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].username, "Mod");
    }

    #[test]
    fn test_empty_transcript_is_success() {
        let address = RetrievalAddress::new(1, 1, 1);
        let service = LogService::new(MemorySource::new().with_transcript(address, ""));
        assert!(service.fetch_logs("1-1-1").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_identifier_skips_source() {
        let service = counting(MemorySource::new());

        let err = service.fetch_logs("1-2").unwrap_err();
        assert!(matches!(err, ModlogError::MalformedIdentifier { .. }));
        assert_eq!(service.source().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_transcript_fetched_once() {
        let service = counting(MemorySource::new());

        let err = service.fetch_logs("1-2-3").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(service.source().calls.load(Ordering::SeqCst), 1);
    }
}
