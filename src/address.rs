//! Log identifier resolution.
//!
//! A published log link carries an opaque identifier of the form
//! `hex-hex-hex`: the channel id, message id and file id of the uploaded
//! transcript, each written in lowercase hexadecimal to keep links short.
//! [`resolve`] turns that identifier back into a [`RetrievalAddress`], whose
//! decimal components locate the transcript in the content store.
//!
//! ```
//! use modlog::address::{resolve, RetrievalAddress};
//!
//! let address = resolve("ff-10-a")?;
//! assert_eq!(address, RetrievalAddress::new(255, 16, 10));
//! assert_eq!(address.decimal_components(), ["255", "16", "10"]);
//! assert_eq!(address.to_identifier(), "ff-10-a");
//! # Ok::<(), modlog::ModlogError>(())
//! ```
//!
//! Resolution fails closed: any malformation is reported as
//! [`ModlogError::MalformedIdentifier`], which belongs to the "not found"
//! outcome class.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModlogError, Result};

/// Separator between identifier segments.
pub const SEGMENT_SEPARATOR: char = '-';

/// File name prefix of uploaded transcripts.
pub const TRANSCRIPT_FILE_PREFIX: &str = "modmail_log_";

/// File name suffix of uploaded transcripts.
pub const TRANSCRIPT_FILE_SUFFIX: &str = ".txt";

/// Largest component value an identifier can carry (`i64::MAX`).
pub const MAX_COMPONENT: u64 = i64::MAX as u64;

/// Location of one transcript in the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RetrievalAddress {
    pub channel_id: u64,
    pub message_id: u64,
    pub file_id: u64,
}

impl RetrievalAddress {
    /// Creates an address without range checks.
    ///
    /// Components above [`MAX_COMPONENT`] produce identifiers that [`resolve`]
    /// rejects; use [`RetrievalAddress::try_new`] for untrusted input.
    pub fn new(channel_id: u64, message_id: u64, file_id: u64) -> Self {
        Self {
            channel_id,
            message_id,
            file_id,
        }
    }

    /// Creates an address, rejecting components above [`MAX_COMPONENT`].
    ///
    /// ```
    /// use modlog::address::RetrievalAddress;
    ///
    /// assert!(RetrievalAddress::try_new(1, 2, 3).is_ok());
    /// assert!(RetrievalAddress::try_new(u64::MAX, 2, 3).is_err());
    /// ```
    pub fn try_new(channel_id: u64, message_id: u64, file_id: u64) -> Result<Self> {
        for (what, value) in [("channel", channel_id), ("message", message_id), ("file", file_id)] {
            if value > MAX_COMPONENT {
                return Err(ModlogError::invalid_format(
                    "address",
                    format!("{what} id {value} exceeds {MAX_COMPONENT}"),
                ));
            }
        }
        Ok(Self::new(channel_id, message_id, file_id))
    }

    /// Returns the three components rendered in decimal, in order.
    pub fn decimal_components(&self) -> [String; 3] {
        [
            self.channel_id.to_string(),
            self.message_id.to_string(),
            self.file_id.to_string(),
        ]
    }

    /// Encodes the address as a `hex-hex-hex` identifier.
    ///
    /// This is the inverse of [`resolve`] for every address whose components
    /// fit in a signed 64-bit integer.
    pub fn to_identifier(&self) -> String {
        format!(
            "{:x}{sep}{:x}{sep}{:x}",
            self.channel_id,
            self.message_id,
            self.file_id,
            sep = SEGMENT_SEPARATOR
        )
    }

    /// Returns `<channel>/<message>/modmail_log_<file>.txt`, the path of the
    /// transcript relative to the content store root.
    pub fn relative_path(&self) -> String {
        format!(
            "{}/{}/{}{}{}",
            self.channel_id,
            self.message_id,
            TRANSCRIPT_FILE_PREFIX,
            self.file_id,
            TRANSCRIPT_FILE_SUFFIX
        )
    }

    /// Extracts the address from a content-store URL.
    ///
    /// The URL must end in `<channel>/<message>/modmail_log_<file>.txt`; any
    /// scheme, host and leading path are ignored.
    ///
    /// ```
    /// use modlog::address::RetrievalAddress;
    ///
    /// let url = "https://cdn.discordapp.com/attachments/255/16/modmail_log_10.txt";
    /// let address = RetrievalAddress::from_attachment_url(url)?;
    /// assert_eq!(address.to_identifier(), "ff-10-a");
    /// # Ok::<(), modlog::ModlogError>(())
    /// ```
    pub fn from_attachment_url(url: &str) -> Result<Self> {
        let invalid = |message: &str| ModlogError::invalid_format("transcript URL", format!("{message}: '{url}'"));

        // Query strings are appended by the store for signed links.
        let path = url.split(['?', '#']).next().unwrap_or(url);

        let mut parts = path.rsplit('/');
        let file_name = parts.next().unwrap_or_default();
        let message = parts.next().ok_or_else(|| invalid("missing message id"))?;
        let channel = parts.next().ok_or_else(|| invalid("missing channel id"))?;

        let file = file_name
            .strip_prefix(TRANSCRIPT_FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(TRANSCRIPT_FILE_SUFFIX))
            .ok_or_else(|| invalid("not a modmail log file"))?;

        let parse = |value: &str, what: &str| {
            value
                .parse::<i64>()
                .ok()
                .filter(|v| *v >= 0)
                .map(|v| v as u64)
                .ok_or_else(|| invalid(&format!("invalid {what} id")))
        };

        Ok(Self::new(
            parse(channel, "channel")?,
            parse(message, "message")?,
            parse(file, "file")?,
        ))
    }
}

impl fmt::Display for RetrievalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.channel_id, self.message_id, self.file_id)
    }
}

/// Resolves an opaque `hex-hex-hex` identifier into a [`RetrievalAddress`].
///
/// Each segment must be a hexadecimal integer that fits in a signed 64-bit
/// integer. Case is ignored; no `0x` prefix is accepted.
///
/// # Errors
///
/// Returns [`ModlogError::MalformedIdentifier`] when the identifier does not
/// have exactly three segments or any segment fails to parse.
pub fn resolve(identifier: &str) -> Result<RetrievalAddress> {
    let segments: Vec<&str> = identifier.split(SEGMENT_SEPARATOR).collect();

    if segments.len() != 3 {
        return Err(ModlogError::malformed_identifier(
            identifier,
            format!("expected 3 segments, found {}", segments.len()),
        ));
    }

    let mut ids = [0u64; 3];
    for (slot, segment) in ids.iter_mut().zip(&segments) {
        *slot = decode_segment(segment).map_err(|reason| {
            ModlogError::malformed_identifier(identifier, format!("segment '{segment}': {reason}"))
        })?;
    }

    let [channel_id, message_id, file_id] = ids;
    Ok(RetrievalAddress::new(channel_id, message_id, file_id))
}

fn decode_segment(segment: &str) -> std::result::Result<u64, String> {
    let value = i64::from_str_radix(segment, 16).map_err(|e| e.to_string())?;
    u64::try_from(value).map_err(|_| "negative value".to_string())
}
