//! # modlog CLI
//!
//! Command-line interface for the modlog library.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use modlog::address::{RetrievalAddress, resolve};
use modlog::cli::{Args, Command, OutputArgs, fetch_config};
use modlog::core::apply_filters;
use modlog::format::{OutputFormat, to_format_string, write_to_format};
use modlog::response::LogResponse;
use modlog::service::LogService;
use modlog::sources::{DirectorySource, HttpSource, TranscriptSource};
use modlog::transcript::TranscriptParser;
use modlog::{MessageRecord, ModlogError};

fn main() -> ExitCode {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays clean for records.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "modlog=warn",
        1 => "modlog=debug",
        _ => "modlog=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode, ModlogError> {
    match args.command {
        Command::Fetch {
            id,
            dir,
            cdn_base,
            timeout,
            envelope,
            output,
        } => {
            let config = fetch_config(&cdn_base, timeout);
            let source: Box<dyn TranscriptSource> = match dir {
                Some(root) => Box::new(DirectorySource::with_config(root, &config)),
                None => Box::new(HttpSource::with_config(config)?),
            };
            let service = LogService::new(source);

            if envelope {
                let response = LogResponse::handle(Some(&id), &service);
                println!("{}", response.body);
                debug!(status = response.status, "envelope written");
                return Ok(if response.is_success() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                });
            }

            let start = Instant::now();
            let records = service.fetch_logs(&id)?;
            eprintln!(
                "📥 Fetched {} records from {} ({:.2}s)",
                records.len(),
                service.source().name(),
                start.elapsed().as_secs_f64()
            );
            emit(records, &output)?;
        }

        Command::Parse { input, output } => {
            let parser = TranscriptParser::new();
            let start = Instant::now();
            let records = parser.parse_file(&input)?;
            eprintln!(
                "⏳ Parsed {} records from {} ({:.2}s)",
                records.len(),
                input.display(),
                start.elapsed().as_secs_f64()
            );
            emit(records, &output)?;
        }

        Command::Resolve { id, cdn_base } => {
            let address = resolve(&id)?;
            println!("{}", address);
            println!("{}", fetch_config(&cdn_base, 0).transcript_url(&address));
        }

        Command::Encode { ids, url } => {
            let address = match (url, ids.as_slice()) {
                (Some(url), _) => RetrievalAddress::from_attachment_url(&url)?,
                (None, &[channel, message, file]) => RetrievalAddress::try_new(channel, message, file)?,
                (None, _) => {
                    return Err(ModlogError::invalid_format(
                        "identifier",
                        "expected CHANNEL MESSAGE FILE or --url",
                    ));
                }
            };
            println!("{}", address.to_identifier());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Filters the records and writes them to the output file or stdout.
fn emit(records: Vec<MessageRecord>, args: &OutputArgs) -> Result<(), ModlogError> {
    let filter = args.filter()?;
    let total = records.len();
    let records = apply_filters(records, &filter);
    if filter.is_active() {
        eprintln!("🔍 {} of {} records after filtering", records.len(), total);
    }

    let format: OutputFormat = args.format.into();
    let config = args.output_config();

    match args.output {
        Some(ref path) => {
            write_to_format(&records, path, format, &config)?;
            eprintln!("✅ Done! {} written to {}", format, path.display());
        }
        None => {
            let text = to_format_string(&records, format, &config)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.is_empty() && !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
