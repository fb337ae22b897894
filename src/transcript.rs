//! Modmail transcript parser.
//!
//! A transcript is plain text with one header line per message:
//!
//! ```text
//! [2023-01-01 12:00:00] Alice#1234 (User): hello world (Attachment: http://x/a.png)
//! [2023-01-01 12:00:05] Mod#0001 (Staff): hi Alice
//! this line continues the staff reply
//! ```
//!
//! Any line that is not a header continues the body of the message before it.
//! Lines before the first header have nowhere to go and are dropped.
//!
//! Parsing is total: every input produces a (possibly empty) sequence of
//! [`MessageRecord`]s and nothing is ever reported as an error.
//!
//! ```
//! use modlog::transcript::parse_transcript;
//! use modlog::Role;
//!
//! let records = parse_transcript(
//!     "[2023-01-01 12:00:01] Bob#0001 (Staff): (Attachment: http://x/c.png)",
//! );
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].role, Role::Staff);
//! assert_eq!(records[0].message, "");
//! assert_eq!(records[0].attachments, vec!["http://x/c.png"]);
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::record::{MessageRecord, Role};
use crate::sources::decode_body;

/// Header line: `[YYYY-MM-DD HH:MM:SS] name#NNNN (Role):`
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[[0-9-]{10} [0-9:]{8}\] [^\n]+#[0-9]{4} \((User|Staff|Comment)\):")
        .expect("header pattern is valid")
});

/// Marker that introduces an inline attachment reference.
pub const ATTACHMENT_MARKER: &str = "(Attachment: ";

const ATTACHMENT_SEPARATOR: &str = " (Attachment: ";

/// Separates the header from the message body.
const BODY_SEPARATOR: &str = ": ";

/// Character offsets into the part of a header before the first `#`.
const TIMESTAMP_START: usize = 1;
const TIMESTAMP_END: usize = 20;
const USERNAME_START: usize = 22;

/// Characters after the first `#` that precede the role label: `NNNN (`.
const DISCRIMINATOR_LEN: usize = 4;
const ROLE_OFFSET: usize = 6;

/// Returns `true` if `line` starts a new message.
///
/// ```
/// use modlog::transcript::is_header_line;
///
/// assert!(is_header_line("[2023-01-01 12:00:00] Alice#1234 (User): hi"));
/// assert!(!is_header_line("[2023-01-01 12:00:00] Alice#123 (User): hi"));
/// ```
pub fn is_header_line(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

/// Parses a whole transcript into message records, in input order.
pub fn parse_transcript(raw: &str) -> Vec<MessageRecord> {
    TranscriptParser::new().parse(raw)
}

/// Where continuation lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No header seen yet; continuation lines are dropped.
    NoRecordYet,
    /// Continuation lines extend the record at this index.
    HaveRecord(usize),
}

/// Stateless transcript parser.
///
/// Each call to [`parse`](TranscriptParser::parse) uses its own accumulator,
/// so one parser can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

impl TranscriptParser {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    pub fn name(&self) -> &'static str {
        "Modmail TXT"
    }

    /// Parses transcript text. Never fails.
    ///
    /// Lines are split on `\n` only, so a `\r` from CRLF input stays part of
    /// the line, and a trailing newline yields one final empty continuation.
    #[allow(clippy::unused_self)]
    pub fn parse(&self, raw: &str) -> Vec<MessageRecord> {
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut state = ScanState::NoRecordYet;
        let mut dropped = 0usize;

        for line in raw.split('\n') {
            if is_header_line(line) {
                records.push(parse_header(line));
                state = ScanState::HaveRecord(records.len() - 1);
                continue;
            }

            match state {
                ScanState::HaveRecord(index) => {
                    let body = &mut records[index].message;
                    body.push('\n');
                    body.push_str(line);
                }
                ScanState::NoRecordYet => {
                    trace!(line, "dropping line before first header");
                    dropped += 1;
                }
            }
        }

        debug!(
            records = records.len(),
            dropped_lines = dropped,
            bytes = raw.len(),
            "parsed transcript"
        );
        records
    }

    /// Reads a transcript from disk and parses it.
    ///
    /// Only reading can fail. Invalid UTF-8 is replaced the same way the
    /// transcript sources replace it.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let bytes = fs::read(path)?;
        Ok(self.parse(&decode_body(&bytes)))
    }
}

/// Splits a line already known to be a header into its record.
fn parse_header(line: &str) -> MessageRecord {
    // Only the first `#` delimits; later ones stay in the second half.
    let (part_one, part_two) = line.split_once('#').unwrap_or((line, ""));

    let timestamp = char_slice(part_one, TIMESTAMP_START, TIMESTAMP_END);
    let username = skip_chars(part_one, USERNAME_START);
    let discriminator = char_slice(part_two, 0, DISCRIMINATOR_LEN);

    let role_text = skip_chars(part_two, ROLE_OFFSET);
    let role = if role_text.starts_with("Staff") {
        Role::Staff
    } else if role_text.starts_with("Comment") {
        Role::Comment
    } else {
        Role::User
    };

    let body = part_two
        .split_once(BODY_SEPARATOR)
        .map(|(_, rest)| rest)
        .unwrap_or_default();
    let (message, attachments) = split_attachments(body);

    MessageRecord {
        timestamp: timestamp.to_string(),
        username: username.to_string(),
        discriminator: discriminator.to_string(),
        role,
        message,
        attachments,
    }
}

/// Separates the body text from its trailing ` (Attachment: ...)` references.
fn split_attachments(body: &str) -> (String, Vec<String>) {
    // A body made only of attachments has no text before the first marker;
    // the leading space lets the separator match it.
    let padded;
    let body = if body.starts_with(ATTACHMENT_MARKER) {
        padded = format!(" {body}");
        padded.as_str()
    } else {
        body
    };

    let mut pieces = body.split(ATTACHMENT_SEPARATOR);
    let message = pieces.next().unwrap_or_default().to_string();

    let attachments = pieces
        .map(|piece| piece.strip_suffix(')').unwrap_or(piece))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    (message, attachments)
}

/// Returns `s` without its first `n` characters (empty if shorter).
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Returns characters `start..end` of `s`, clamped to its length.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let tail = skip_chars(s, start);
    match tail.char_indices().nth(end - start) {
        Some((idx, _)) => &tail[..idx],
        None => tail,
    }
}
