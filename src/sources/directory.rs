//! Local directory transcript source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{TranscriptSource, decode_body};
use crate::address::{RetrievalAddress, TRANSCRIPT_FILE_PREFIX, TRANSCRIPT_FILE_SUFFIX};
use crate::config::FetchConfig;
use crate::error::{ModlogError, Result};

/// Reads transcripts from a directory that mirrors the content store:
/// `<root>/<channel>/<message>/modmail_log_<file>.txt`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    max_transcript_bytes: usize,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_transcript_bytes: FetchConfig::default().max_transcript_bytes,
        }
    }

    /// Uses the size limit from `config`.
    pub fn with_config(root: impl Into<PathBuf>, config: &FetchConfig) -> Self {
        Self {
            root: root.into(),
            max_transcript_bytes: config.max_transcript_bytes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns where the transcript for `address` would live.
    pub fn path_for(&self, address: &RetrievalAddress) -> PathBuf {
        self.root
            .join(address.channel_id.to_string())
            .join(address.message_id.to_string())
            .join(format!(
                "{TRANSCRIPT_FILE_PREFIX}{}{TRANSCRIPT_FILE_SUFFIX}",
                address.file_id
            ))
    }
}

impl TranscriptSource for DirectorySource {
    fn name(&self) -> &'static str {
        "Directory"
    }

    fn fetch(&self, address: &RetrievalAddress) -> Result<String> {
        let path = self.path_for(address);
        debug!(path = %path.display(), "reading transcript");

        let metadata = match fs::metadata(&path) {
            Ok(m) if m.is_file() => m,
            Ok(_) => return Err(ModlogError::unavailable(address, "not a file")),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ModlogError::unavailable(address, "no such transcript"));
            }
            Err(e) => return Err(e.into()),
        };

        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > self.max_transcript_bytes {
            return Err(ModlogError::too_large(self.max_transcript_bytes, size));
        }

        let bytes = fs::read(&path)?;
        Ok(decode_body(&bytes))
    }
}
