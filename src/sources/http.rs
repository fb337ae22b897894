//! HTTP transcript source.

use std::io::Read;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{TranscriptSource, decode_body};
use crate::address::RetrievalAddress;
use crate::config::FetchConfig;
use crate::error::{ModlogError, Result};

/// Fetches transcripts from the content store with a blocking HTTP client.
///
/// Any transport failure or non-200 status is reported as
/// [`ModlogError::TranscriptUnavailable`]. Failing to read a body that the
/// store did start sending is an internal error ([`ModlogError::Io`]).
///
/// At most `max_transcript_bytes + 1` bytes of a body are ever buffered,
/// whether or not the store announces a `Content-Length`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: FetchConfig,
}

impl HttpSource {
    /// Creates a source for the default content store.
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

impl TranscriptSource for HttpSource {
    fn name(&self) -> &'static str {
        "HTTP"
    }

    fn fetch(&self, address: &RetrievalAddress) -> Result<String> {
        let url = self.config.transcript_url(address);
        debug!(url = %url, "fetching transcript");

        let mut response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "transcript request failed");
                return Err(ModlogError::unavailable(address, e.to_string()));
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            debug!(url = %url, status = status.as_u16(), "transcript not served");
            return Err(ModlogError::unavailable(address, format!("HTTP {status}")));
        }

        let max = self.config.max_transcript_bytes;
        if let Some(len) = response.content_length() {
            let len = usize::try_from(len).unwrap_or(usize::MAX);
            if len > max {
                return Err(ModlogError::too_large(max, len));
            }
        }

        // Chunked bodies carry no length; stop one byte past the limit.
        let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
        let mut body = Vec::new();
        response.by_ref().take(limit).read_to_end(&mut body)?;
        if body.len() > max {
            warn!(url = %url, max_bytes = max, "transcript body exceeds limit");
            return Err(ModlogError::too_large(max, body.len()));
        }

        debug!(url = %url, bytes = body.len(), "transcript fetched");
        Ok(decode_body(&body))
    }
}
