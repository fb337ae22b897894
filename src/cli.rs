//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level CLI arguments
//! - [`Command`] - the `fetch`, `parse`, `resolve` and `encode` subcommands
//! - [`OutputArgs`] - output and filter options shared by `fetch` and `parse`
//! - [`OutputFormat`] and [`RoleArg`] - value enums mapped onto library types
//!
//! ```rust
//! use clap::Parser;
//! use modlog::cli::{Args, Command};
//!
//! let args = Args::parse_from(["modlog", "resolve", "a-b-c"]);
//! assert!(matches!(args.command, Command::Resolve { .. }));
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::address::MAX_COMPONENT;
use crate::config::{DEFAULT_CDN_BASE, FetchConfig, OutputConfig};
use crate::core::RecordFilter;
use crate::error::Result;
use crate::record::Role;

/// Resolve modmail log identifiers and parse their transcripts into
/// structured records.
#[derive(Parser, Debug, Clone)]
#[command(name = "modlog")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    modlog resolve 4d2-10e1-1a85
    modlog fetch 4d2-10e1-1a85 --format csv -o logs.csv
    modlog fetch 4d2-10e1-1a85 --dir ./mirror --envelope
    modlog parse modmail_log_6789.txt --role staff --pretty
    modlog encode 1234 4321 6789")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve an identifier, fetch its transcript and write the records
    Fetch {
        /// Log identifier (hex-hex-hex)
        id: String,

        /// Read transcripts from a local mirror of the content store
        #[arg(long, value_name = "DIR", conflicts_with = "cdn_base")]
        dir: Option<PathBuf>,

        /// Base URL of the content store
        #[arg(long, value_name = "URL", default_value = DEFAULT_CDN_BASE)]
        cdn_base: String,

        /// HTTP timeout in seconds
        #[arg(long, value_name = "SECS", default_value_t = 10)]
        timeout: u64,

        /// Print the HTTP-style response body instead of writing records
        #[arg(long)]
        envelope: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Parse a transcript file
    Parse {
        /// Path to the transcript
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the retrieval address for an identifier
    Resolve {
        /// Log identifier (hex-hex-hex)
        id: String,

        /// Base URL used for the printed transcript URL
        #[arg(long, value_name = "URL", default_value = DEFAULT_CDN_BASE)]
        cdn_base: String,
    },

    /// Build an identifier from decimal ids or a transcript URL
    #[command(group = clap::ArgGroup::new("target").required(true).args(["ids", "url"]))]
    Encode {
        /// Channel, message and file id
        #[arg(
            num_args = 3,
            value_names = ["CHANNEL", "MESSAGE", "FILE"],
            value_parser = clap::value_parser!(u64).range(..=MAX_COMPONENT)
        )]
        ids: Vec<u64>,

        /// Transcript URL on the content store
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },
}

/// Output and filter options.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep records from this username
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Keep records with this role
    #[arg(long, value_enum)]
    pub role: Option<RoleArg>,
}

impl OutputArgs {
    /// Builds the record filter from the date, author and role options.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate`](crate::ModlogError::InvalidDate) for a
    /// malformed `--after` or `--before`.
    pub fn filter(&self) -> Result<RecordFilter> {
        let mut filter = RecordFilter::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_username(from.clone());
        }
        if let Some(role) = self.role {
            filter = filter.with_role(role.into());
        }
        Ok(filter)
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new().with_pretty(self.pretty)
    }
}

/// Builds the fetch configuration for the `fetch` and `resolve` commands.
pub fn fetch_config(cdn_base: &str, timeout_secs: u64) -> FetchConfig {
    FetchConfig::new()
        .with_cdn_base(cdn_base)
        .with_timeout_secs(timeout_secs)
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of records (default)
    #[default]
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}

/// Role filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum RoleArg {
    User,
    Staff,
    Comment,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Role {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Staff => Role::Staff,
            RoleArg::Comment => Role::Comment,
        }
    }
}
