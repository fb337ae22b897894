//! Post-parse processing for modlog.
//!
//! This module contains:
//! - [`filter`] - Record filtering by date, author and role
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use modlog::core::{RecordFilter, apply_filters, to_csv, write_json, write_jsonl};
//! # }
//! ```

pub mod filter;
pub mod output;

pub use filter::{RecordFilter, apply_filters};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
