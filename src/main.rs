use std::{
    fs,
    io::{self, Read},
    path::Path,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use cite::{ArticleRecord, CITATION_FORMATS, FormatKind, Journal, citation_format};
use owo_colors::{OwoColorize, Stream::Stderr};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, Source};

mod cli;

/// `-v` count to log level; `RUST_LOG` wins when set.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn load_journal(path: Option<&Path>) -> anyhow::Result<Journal> {
    let Some(path) = path else {
        return Ok(Journal::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read journal profile {}", path.display()))?;
    let journal = Journal::from_json(&json)
        .with_context(|| format!("invalid journal profile {}", path.display()))?;
    tracing::info!(name = %journal.name, "loaded journal profile");
    Ok(journal)
}

fn load_records(src: &Source) -> anyhow::Result<Vec<ArticleRecord>> {
    let json = match src {
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
        Source::File(path) => fs::read_to_string(path).context("failed to read file")?,
    };
    let records = ArticleRecord::many_from_json(&json).context("invalid article record")?;
    tracing::debug!(%src, count = records.len(), "loaded records");
    Ok(records)
}

fn run_format(sources: Vec<Source>, style: FormatKind, journal: &Journal) -> ExitCode {
    let format = citation_format(style);
    tracing::info!(style = %style, journal = %journal.name, "formatting");

    let sources = if sources.is_empty() {
        vec![Source::Stdin]
    } else {
        sources
    };

    // The summary counts sources; a source holding an array still counts once.
    let (mut loaded, mut failed, mut rendered) = (0usize, 0usize, 0usize);
    for src in &sources {
        match load_records(src) {
            Ok(records) => {
                for record in &records {
                    let citation = format.generate_with(journal, record);
                    if style == FormatKind::Bibtex {
                        println!("{citation}\n");
                    } else {
                        println!("{citation}");
                    }
                    rendered += 1;
                }
                loaded += 1;
            }
            Err(e) => {
                tracing::warn!(%src, error = %e, "skipping source");
                eprintln!("{} {src}: {e:#}", "✗".if_supports_color(Stderr, |t| t.red()));
                failed += 1;
            }
        }
    }

    tracing::debug!(rendered, loaded, failed, "done");
    eprintln!(
        "{} {loaded}  {} {failed}",
        "✓".if_supports_color(Stderr, |t| t.green()),
        "✗".if_supports_color(Stderr, |t| t.red()),
    );

    if failed == sources.len() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn styles() {
    for f in &CITATION_FORMATS {
        println!("{:<10} {:<10} {}", f.kind.as_str(), f.display_name, f.description);
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    setup_logging(args.verbose);
    match args.command {
        Command::Format {
            from,
            style,
            journal,
        } => {
            let journal = load_journal(journal.as_deref())?;
            Ok(run_format(from, style, &journal))
        }
        Command::Styles => {
            styles();
            Ok(ExitCode::SUCCESS)
        }
    }
}
