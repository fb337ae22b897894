//! Transcript rendering.
//!
//! The inverse direction of [`transcript`](crate::transcript): writes records
//! in the line format the modmail bot uploads when a ticket is closed. Used to
//! build fixtures and synthetic transcripts.
//!
//! ```
//! use modlog::render::render_record;
//! use modlog::{MessageRecord, Role};
//!
//! let record = MessageRecord::new("2023-01-01 12:00:01", "Bob", "0001")
//!     .with_role(Role::Staff)
//!     .with_attachment("http://x/c.png");
//!
//! assert_eq!(
//!     render_record(&record),
//!     "[2023-01-01 12:00:01] Bob#0001 (Staff): (Attachment: http://x/c.png)"
//! );
//! ```

use crate::record::MessageRecord;
use crate::transcript::ATTACHMENT_MARKER;

/// Renders one record as a header line (plus any continuation lines carried
/// in its message), without a trailing newline.
pub fn render_record(record: &MessageRecord) -> String {
    let mut line = format!(
        "[{}] {}#{} ({}): {}",
        record.timestamp, record.username, record.discriminator, record.role, record.message
    );

    for (i, attachment) in record.attachments.iter().enumerate() {
        if i > 0 || !record.message.is_empty() {
            line.push(' ');
        }
        line.push_str(ATTACHMENT_MARKER);
        line.push_str(attachment);
        line.push(')');
    }

    line
}

/// Renders records as a transcript, one `\n`-terminated entry per record.
pub fn render_transcript(records: &[MessageRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&render_record(record));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Role;
    use crate::transcript::parse_transcript;

    #[test]
    fn test_render_text_with_attachments() {
        let record = MessageRecord::new("2023-01-01 12:00:00", "Alice", "1234")
            .with_message("hello world")
            .with_attachment("http://x/a.png")
            .with_attachment("http://x/b.png");

        assert_eq!(
            render_record(&record),
            "[2023-01-01 12:00:00] Alice#1234 (User): hello world (Attachment: http://x/a.png) (Attachment: http://x/b.png)"
        );
    }

    #[test]
    fn test_render_transcript_terminates_lines() {
        let records = vec![
            MessageRecord::new("2023-01-01 12:00:00", "a", "0001").with_message("one"),
            MessageRecord::new("2023-01-01 12:00:01", "b", "0002")
                .with_role(Role::Comment)
                .with_message("two"),
        ];
        let text = render_transcript(&records);
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("(Comment): two\n"));
    }

    #[test]
    fn test_render_then_parse() {
        let records = vec![
            MessageRecord::new("2023-01-01 12:00:00", "Alice", "1234")
                .with_message("first\nsecond line"),
            MessageRecord::new("2023-01-01 12:00:01", "Bob", "0001")
                .with_role(Role::Staff)
                .with_attachment("http://x/c.png"),
            MessageRecord::new("2023-01-01 12:00:02", "Mod", "9999")
                .with_role(Role::Comment)
                .with_message("last"),
        ];

        // Without the trailing newline the parse is exact.
        let text = render_transcript(&records);
        let parsed = parse_transcript(text.trim_end_matches('\n'));
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_transcript(&[]), "");
    }
}
