//! # modlog
//!
//! Resolve modmail log identifiers, fetch the transcripts they point to and
//! parse them into structured message records.
//!
//! ## Overview
//!
//! A modmail thread is archived as a plain-text transcript uploaded to a
//! content store. Each archive is published under an opaque identifier of
//! three hexadecimal segments (`4d2-10e1-1a85`). This crate provides:
//!
//! - [`address`] - identifier decoding into a [`RetrievalAddress`](address::RetrievalAddress)
//! - [`transcript`] - the line-oriented transcript parser
//! - [`sources`] - where transcripts come from (HTTP, a local mirror, memory)
//! - [`service`] - the identifier → records pipeline
//! - [`response`] - HTTP-style status mapping for log endpoints
//!
//! ## Quick Start
//!
//! ```rust
//! use modlog::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let text = "[2023-01-01 12:00:00] Alice#1234 (User): Hello\n\
//!             continued line\n\
//!             [2023-01-01 12:00:05] Mod#0001 (Staff): Hi (Attachment: http://x/a.png)";
//!
//! let records = parse_transcript(text);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].message, "Hello\ncontinued line");
//! assert_eq!(records[1].role, Role::Staff);
//! assert_eq!(records[1].attachments, vec!["http://x/a.png"]);
//!
//! let address = resolve("4d2-10e1-1a85")?;
//! assert_eq!(address.channel_id, 1234);
//! # Ok(())
//! # }
//! ```
//!
//! ## Fetching
//!
//! ```rust,no_run
//! # #[cfg(feature = "http")]
//! # fn main() -> modlog::Result<()> {
//! use modlog::service::LogService;
//! use modlog::sources::HttpSource;
//!
//! let service = LogService::new(HttpSource::new()?);
//! for record in service.fetch_logs("4d2-10e1-1a85")? {
//!     println!("{}: {}", record.author(), record.message);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "http"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`record`] - [`MessageRecord`], [`Role`]
//! - [`address`] - [`resolve`], [`RetrievalAddress`](address::RetrievalAddress)
//! - [`transcript`] - [`parse_transcript`], [`TranscriptParser`](transcript::TranscriptParser)
//! - [`render`] - records back to transcript text
//! - [`sources`] - [`TranscriptSource`](sources::TranscriptSource) and implementations
//! - [`service`] - [`LogService`](service::LogService)
//! - [`response`] - [`LogResponse`](response::LogResponse) (`json-output` feature)
//! - [`config`] - [`FetchConfig`](config::FetchConfig), [`OutputConfig`](config::OutputConfig)
//! - [`core`] - filtering and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat)
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`error`] - [`ModlogError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod address;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod record;
pub mod render;
#[cfg(feature = "json-output")]
pub mod response;
pub mod service;
pub mod sources;
pub mod transcript;

pub use address::resolve;
pub use error::{ModlogError, Result};
pub use record::{MessageRecord, Role};
pub use transcript::parse_transcript;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use modlog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, Role};

    pub use crate::error::{ModlogError, Result};

    pub use crate::address::{RetrievalAddress, resolve};
    pub use crate::transcript::{TranscriptParser, parse_transcript};
    pub use crate::render::render_transcript;

    pub use crate::config::{FetchConfig, OutputConfig};

    pub use crate::service::LogService;
    #[cfg(feature = "http")]
    pub use crate::sources::HttpSource;
    pub use crate::sources::{DirectorySource, MemorySource, TranscriptSource};

    pub use crate::core::filter::{RecordFilter, apply_filters};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
