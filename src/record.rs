//! Parsed transcript message type.
//!
//! This module provides [`MessageRecord`], one message recovered from a
//! modmail transcript, and [`Role`], the closed set of author classifications
//! the transcript format knows about.
//!
//! # Examples
//!
//! ```
//! use modlog::{MessageRecord, Role};
//!
//! let record = MessageRecord::new("2023-01-01 12:00:00", "Alice", "1234")
//!     .with_role(Role::Staff)
//!     .with_message("hello")
//!     .with_attachment("http://x/a.png");
//!
//! assert_eq!(record.author(), "Alice#1234");
//! assert!(record.has_attachments());
//! ```
//!
//! ## Serialization
//!
//! Field names and role spellings are part of the wire format consumed by log
//! viewers:
//!
//! ```
//! use modlog::MessageRecord;
//!
//! let record = MessageRecord::new("2023-01-01 12:00:00", "Alice", "1234");
//! let json = serde_json::to_string(&record)?;
//! assert!(json.contains(r#""role":"User""#));
//! assert!(json.contains(r#""attachments":[]"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ModlogError;

/// Timestamp layout used in transcript headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Who wrote a message.
///
/// `User` is the ticket opener, `Staff` a moderator reply relayed to the user,
/// and `Comment` an internal note that never left the modmail channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Staff,
    Comment,
}

impl Role {
    /// Returns the label used inside the `(...)` of a header line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Staff => "Staff",
            Role::Comment => "Comment",
        }
    }

    /// Returns all roles.
    pub fn all() -> &'static [Role] {
        &[Role::User, Role::Staff, Role::Comment]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "staff" => Ok(Role::Staff),
            "comment" => Ok(Role::Comment),
            _ => Err(ModlogError::invalid_format(
                "role",
                format!("Unknown role: '{}'. Expected one of: user, staff, comment", s),
            )),
        }
    }
}

/// One message recovered from a transcript.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | `YYYY-MM-DD HH:MM:SS`, copied verbatim from the header |
/// | `username` | Author name, everything before the first `#` |
/// | `discriminator` | The 4 characters after the first `#` |
/// | `role` | [`Role`] taken from the header |
/// | `message` | Body text, continuation lines joined with `\n` |
/// | `attachments` | Attachment tokens in the order they appeared |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    pub timestamp: String,
    pub username: String,
    pub discriminator: String,
    pub role: Role,
    pub message: String,
    pub attachments: Vec<String>,
}

impl MessageRecord {
    /// Creates a `User` record with an empty body and no attachments.
    pub fn new(
        timestamp: impl Into<String>,
        username: impl Into<String>,
        discriminator: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            username: username.into(),
            discriminator: discriminator.into(),
            role: Role::User,
            message: String::new(),
            attachments: Vec::new(),
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Appends one attachment token.
    #[must_use]
    pub fn with_attachment(mut self, attachment: impl Into<String>) -> Self {
        self.attachments.push(attachment.into());
        self
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `username#discriminator`.
    pub fn author(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    /// Parses the verbatim timestamp.
    ///
    /// Parsing never validates timestamps, so this returns `None` for header
    /// lines whose date only had the right shape (e.g. `2023-13-45`).
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Returns `true` if the body is whitespace-only and nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty() && self.attachments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_record_new_defaults() {
        let record = MessageRecord::new("2023-01-01 12:00:00", "Alice", "1234");
        assert_eq!(record.role, Role::User);
        assert!(record.message.is_empty());
        assert!(record.attachments.is_empty());
        assert!(record.is_empty());
    }

    #[test]
    fn test_record_builder() {
        let record = MessageRecord::new("2023-01-01 12:00:00", "Bob", "0001")
            .with_role(Role::Comment)
            .with_message("internal note")
            .with_attachment("a.png")
            .with_attachment("b.png");

        assert_eq!(record.role, Role::Comment);
        assert_eq!(record.message, "internal note");
        assert_eq!(record.attachments, vec!["a.png", "b.png"]);
        assert_eq!(record.author(), "Bob#0001");
    }

    #[test]
    fn test_attachment_only_is_not_empty() {
        let record = MessageRecord::new("2023-01-01 12:00:00", "Bob", "0001").with_attachment("x");
        assert!(!record.is_empty());
    }

    #[test]
    fn test_parsed_timestamp() {
        let record = MessageRecord::new("2024-06-15 08:09:10", "Alice", "1234");
        let ts = record.parsed_timestamp().unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 6);
        assert_eq!(ts.hour(), 8);
        assert_eq!(ts.second(), 10);

        let shaped_only = MessageRecord::new("2024-99-99 99:99:99", "Alice", "1234");
        assert!(shaped_only.parsed_timestamp().is_none());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("STAFF".parse::<Role>().unwrap(), Role::Staff);
        assert_eq!("Comment".parse::<Role>().unwrap(), Role::Comment);
        assert!("admin".parse::<Role>().unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_role_display_matches_header_label() {
        for role in Role::all() {
            assert_eq!(role.to_string(), role.as_str());
        }
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_record_serialization() {
        let record = MessageRecord::new("2023-01-01 12:00:01", "Bob", "0001")
            .with_role(Role::Staff)
            .with_attachment("http://x/c.png");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2023-01-01 12:00:01","username":"Bob","discriminator":"0001","role":"Staff","message":"","attachments":["http://x/c.png"]}"#
        );

        let back: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
