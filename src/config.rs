//! Configuration types for transcript retrieval and output.
//!
//! Plain builder-style structs with no CLI framework dependencies. The
//! `modlog` binary fills them from command-line flags; library users build
//! them directly.
//!
//! - [`FetchConfig`] - where and how transcripts are fetched
//! - [`OutputConfig`] - how records are written
//!
//! # Example
//!
//! ```rust
//! use modlog::config::FetchConfig;
//! use modlog::address::RetrievalAddress;
//!
//! let config = FetchConfig::new()
//!     .with_cdn_base("https://files.example.com/attachments/")
//!     .with_timeout_secs(5);
//!
//! assert_eq!(
//!     config.transcript_url(&RetrievalAddress::new(1, 2, 3)),
//!     "https://files.example.com/attachments/1/2/modmail_log_3.txt"
//! );
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::address::RetrievalAddress;

/// Content store that hosts uploaded transcripts.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.discordapp.com/attachments";

/// Configuration for fetching transcripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL of the content store, without trailing slash
    /// (default: Discord attachment CDN)
    pub cdn_base: String,

    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// Largest transcript accepted, in bytes (default: 16MB)
    pub max_transcript_bytes: usize,

    /// User-Agent header sent with requests
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            cdn_base: DEFAULT_CDN_BASE.to_string(),
            timeout_secs: 10,
            max_transcript_bytes: 16 * 1024 * 1024, // 16MB
            user_agent: concat!("modlog/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FetchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content store base URL. A trailing `/` is ignored.
    #[must_use]
    pub fn with_cdn_base(mut self, base: impl Into<String>) -> Self {
        self.cdn_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets the maximum transcript size.
    #[must_use]
    pub fn with_max_transcript_bytes(mut self, size: usize) -> Self {
        self.max_transcript_bytes = size;
        self
    }

    /// Sets the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the URL of the transcript at `address`.
    pub fn transcript_url(&self, address: &RetrievalAddress) -> String {
        format!(
            "{}/{}",
            self.cdn_base.trim_end_matches('/'),
            address.relative_path()
        )
    }
}

/// Configuration for output writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON arrays (default: false)
    pub pretty: bool,

    /// CSV field delimiter (default: `;`)
    pub delimiter: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            delimiter: b';',
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
