//! Property-based tests for modlog.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use modlog::address::{RetrievalAddress, resolve};
use modlog::render::render_transcript;
use modlog::transcript::{is_header_line, parse_transcript};
use modlog::{MessageRecord, Role};

const MAX_ID: u64 = i64::MAX as u64;

/// Generate a random record using fast strategies (no regex!)
fn arb_record() -> impl Strategy<Value = MessageRecord> {
    (
        (0u32..60, 0u32..60, 0u32..24, 1u32..29),
        prop::sample::select(vec![
            "Alice".to_string(),
            "Bob".to_string(),
            "Иван".to_string(),
            "村上".to_string(),
            "User With Spaces".to_string(),
            "x".to_string(),
        ]),
        0u32..10_000,
        prop::sample::select(Role::all().to_vec()),
        prop::sample::select(vec![
            "Hello".to_string(),
            "Hi there!".to_string(),
            "colons: inside: text".to_string(),
            "Привет мир".to_string(),
            "🎉🔥💀 emoji".to_string(),
            "(parenthesised)".to_string(),
            String::new(),
        ]),
        prop::collection::vec(
            prop::sample::select(vec![
                "https://cdn.example/a.png".to_string(),
                "https://cdn.example/b c.txt".to_string(),
                "file.zip".to_string(),
            ]),
            0..3,
        ),
    )
        .prop_map(|((s, m, h, d), user, disc, role, message, attachments)| {
            let mut record = MessageRecord::new(
                format!("2024-01-{d:02} {h:02}:{m:02}:{s:02}"),
                user,
                format!("{disc:04}"),
            )
            .with_role(role)
            .with_message(message);
            for attachment in attachments {
                record = record.with_attachment(attachment);
            }
            record
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_identifier_round_trip(c in 0..=MAX_ID, m in 0..=MAX_ID, f in 0..=MAX_ID) {
        let address = RetrievalAddress::new(c, m, f);
        prop_assert_eq!(resolve(&address.to_identifier()).unwrap(), address);
        prop_assert_eq!(
            resolve(&address.to_identifier().to_uppercase()).unwrap(),
            address
        );
    }

    #[test]
    fn prop_resolve_rejects_wrong_segment_count(parts in prop::collection::vec(0u64..0xffff, 0..8)) {
        prop_assume!(parts.len() != 3);
        let id = parts.iter().map(|p| format!("{p:x}")).collect::<Vec<_>>().join("-");
        let err = resolve(&id).unwrap_err();
        prop_assert!(err.is_not_found());
    }

    #[test]
    fn prop_resolve_rejects_non_hex(bad in "[g-zG-Z]{1,6}", a in 0u64..0xffff, b in 0u64..0xffff) {
        let id = format!("{a:x}-{bad}-{b:x}");
        prop_assert!(resolve(&id).is_err());
    }

    #[test]
    fn prop_resolve_rejects_negative(a in 1u64..0xffff) {
        let id = format!("-{a:x}-1-2");
        prop_assert!(resolve(&id).is_err());
    }

    #[test]
    fn prop_parser_never_panics(text in "\\PC{0,200}") {
        let records = parse_transcript(&text);
        prop_assert!(records.len() <= text.split('\n').count());
    }

    #[test]
    fn prop_parser_never_panics_on_header_like_lines(
        user in "\\PC{0,12}",
        rest in "\\PC{0,40}",
    ) {
        let text = format!("[2024-01-01 00:00:00] {user}#1234 (Staff): {rest}");
        let records = parse_transcript(&text);
        prop_assert!(records.len() <= 1);
    }

    #[test]
    fn prop_records_match_header_count(records in prop::collection::vec(arb_record(), 0..20)) {
        let text = render_transcript(&records);
        let headers = text.split('\n').filter(|l| is_header_line(l)).count();
        prop_assert_eq!(headers, records.len());
    }

    #[test]
    fn prop_render_parse_reproduces(records in prop::collection::vec(arb_record(), 1..20)) {
        let text = render_transcript(&records);
        let parsed = parse_transcript(text.strip_suffix('\n').unwrap_or(&text));
        prop_assert_eq!(parsed, records);
    }

    #[test]
    fn prop_continuations_join_with_newline(
        lines in prop::collection::vec("[a-z ]{0,20}", 0..10),
    ) {
        let mut text = String::from("[2024-01-01 00:00:00] Alice#1234 (User): first");
        for line in &lines {
            text.push('\n');
            text.push_str(line);
        }

        let records = parse_transcript(&text);
        prop_assert_eq!(records.len(), 1);

        let mut expected = String::from("first");
        for line in &lines {
            expected.push('\n');
            expected.push_str(line);
        }
        prop_assert_eq!(&records[0].message, &expected);
    }

    #[test]
    fn prop_lines_before_first_header_are_dropped(
        preamble in prop::collection::vec("[a-z ]{0,20}", 0..5),
    ) {
        let mut text = preamble.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str("[2024-01-01 00:00:00] Alice#1234 (User): hi");

        let records = parse_transcript(&text);
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(&records[0].message, "hi");
    }
}
