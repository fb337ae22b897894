//! In-memory transcript source.

use std::collections::HashMap;

use super::TranscriptSource;
use crate::address::RetrievalAddress;
use crate::error::{ModlogError, Result};

/// Serves transcripts from a map. Useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    transcripts: HashMap<RetrievalAddress, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` at `address`, replacing any previous transcript.
    pub fn insert(&mut self, address: RetrievalAddress, text: impl Into<String>) {
        self.transcripts.insert(address, text.into());
    }

    #[must_use]
    pub fn with_transcript(mut self, address: RetrievalAddress, text: impl Into<String>) -> Self {
        self.insert(address, text);
        self
    }

    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }
}

impl TranscriptSource for MemorySource {
    fn name(&self) -> &'static str {
        "Memory"
    }

    fn fetch(&self, address: &RetrievalAddress) -> Result<String> {
        self.transcripts
            .get(address)
            .cloned()
            .ok_or_else(|| ModlogError::unavailable(address, "no such transcript"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_fetch() {
        let mut source = MemorySource::new();
        assert!(source.is_empty());

        let address = RetrievalAddress::new(1, 2, 3);
        source.insert(address, "first");
        source.insert(address, "second");

        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch(&address).unwrap(), "second");
    }

    #[test]
    fn test_missing_is_unavailable() {
        let err = MemorySource::new()
            .fetch(&RetrievalAddress::new(1, 2, 3))
            .unwrap_err();
        assert!(matches!(err, ModlogError::TranscriptUnavailable { .. }));
        assert!(err.to_string().contains("1/2/3"));
    }
}
