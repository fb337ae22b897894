//! Benchmarks for modlog parsing, resolution and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- transcript`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use modlog::address::{RetrievalAddress, resolve};
use modlog::config::OutputConfig;
use modlog::core::output::{to_csv, to_json, to_jsonl};
use modlog::core::{RecordFilter, apply_filters};
use modlog::transcript::parse_transcript;
use modlog::{MessageRecord, Role};

use chrono::{Duration, NaiveDate};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_transcript(count: usize) -> String {
    let base = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        let (user, role) = if i % 2 == 0 {
            ("Alice", "User")
        } else {
            ("Mod", "Staff")
        };
        let ts = base + Duration::seconds(i as i64);
        lines.push(format!(
            "[{}] {}#{:04} ({}): Message number {}",
            ts.format("%Y-%m-%d %H:%M:%S"),
            user,
            i % 10_000,
            role,
            i
        ));
        if i % 5 == 0 {
            lines.push(format!("continuation of {}", i));
        }
        if i % 7 == 0 {
            let last = lines.len() - 1;
            lines[last].push_str(" (Attachment: https://cdn.example/a.png)");
        }
    }
    lines.join("\n")
}

fn generate_records(count: usize) -> Vec<MessageRecord> {
    parse_transcript(&generate_transcript(count))
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_transcript_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript_parsing");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_transcript(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(parse_transcript(black_box(text))));
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let short = RetrievalAddress::new(1, 2, 3).to_identifier();
    let snowflake = RetrievalAddress::new(
        1_084_000_000_000_000_000,
        1_084_000_000_000_000_001,
        1_084_000_000_000_000_002,
    )
    .to_identifier();

    for (name, id) in [("short", short.as_str()), ("snowflake", snowflake.as_str()), ("malformed", "zz-1-2")] {
        group.bench_with_input(BenchmarkId::from_parameter(name), id, |b, id| {
            b.iter(|| black_box(resolve(black_box(id))));
        });
    }

    group.finish();
}

// =============================================================================
// Processing Benchmarks
// =============================================================================

fn bench_filter_by_role(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_role");
    let filter = RecordFilter::new().with_role(Role::Staff);

    for size in [1_000_usize, 10_000, 100_000] {
        let records = generate_records(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(apply_filters(black_box(records.clone()), &filter)));
        });
    }

    group.finish();
}

fn bench_filter_by_date(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_date");
    let filter = RecordFilter::new()
        .with_date_from("2024-01-15")
        .unwrap()
        .with_date_to("2024-01-15")
        .unwrap();

    for size in [1_000_usize, 10_000, 100_000] {
        let records = generate_records(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| black_box(apply_filters(black_box(records.clone()), &filter)));
        });
    }

    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let records = generate_records(10_000);
    let config = OutputConfig::new();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("json", |b| b.iter(|| black_box(to_json(&records, &config).unwrap())));
    group.bench_function("jsonl", |b| b.iter(|| black_box(to_jsonl(&records, &config).unwrap())));
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&records, &config).unwrap())));

    group.finish();
}

criterion_group!(
    benches,
    bench_transcript_parsing,
    bench_resolve,
    bench_filter_by_role,
    bench_filter_by_date,
    bench_output,
);
criterion_main!(benches);
