//! Transcript sources.
//!
//! A [`TranscriptSource`] turns a [`RetrievalAddress`] into raw transcript
//! text. The parser never talks to a source; the [`LogService`](crate::service::LogService)
//! wires the two together.
//!
//! # Available Sources
//!
//! - [`HttpSource`] - Fetches from the content store over HTTP (`http` feature)
//! - [`DirectorySource`] - Reads a local mirror laid out like the store
//! - [`MemorySource`] - Serves transcripts held in memory
//!
//! # Example
//!
//! ```rust
//! use modlog::address::RetrievalAddress;
//! use modlog::sources::{MemorySource, TranscriptSource};
//!
//! let address = RetrievalAddress::new(1, 2, 3);
//! let source = MemorySource::new().with_transcript(address, "[2023-01-01 12:00:00] a#0001 (User): hi");
//!
//! assert!(source.fetch(&address).is_ok());
//! assert!(source.fetch(&RetrievalAddress::new(9, 9, 9)).unwrap_err().is_not_found());
//! ```

mod directory;
#[cfg(feature = "http")]
mod http;
mod memory;

pub use directory::DirectorySource;
#[cfg(feature = "http")]
pub use http::HttpSource;
pub use memory::MemorySource;

use crate::address::RetrievalAddress;
use crate::error::Result;

/// Something that can hand back the raw text of a transcript.
///
/// Implementations report a transcript that does not exist as
/// [`ModlogError::TranscriptUnavailable`](crate::ModlogError::TranscriptUnavailable)
/// so callers can treat it like an unresolvable identifier. They never retry.
pub trait TranscriptSource: Send + Sync {
    /// Returns the name of the source (e.g., "HTTP", "Directory").
    fn name(&self) -> &'static str;

    /// Returns the full transcript stored at `address`.
    fn fetch(&self, address: &RetrievalAddress) -> Result<String>;
}

impl<S: TranscriptSource + ?Sized> TranscriptSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self, address: &RetrievalAddress) -> Result<String> {
        (**self).fetch(address)
    }
}

/// Decodes a transcript body, replacing invalid UTF-8 sequences.
pub(crate) fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
