//! Chess notation narrator
//!
//! Reads SAN-like chess notation and prints one English sentence per move,
//! or the structured move records as JSON. Notation comes from positional
//! arguments, a file (`--file`), or an interactive stdin prompt.

mod config;
mod render;

use std::fs;
use std::io::{self, BufRead};

use tracing::{error, info};

use notation_core::error::NotationError;
use notation_core::move_data::MoveRecord;

use crate::config::{InputSource, NarratorConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env for local dev
    let _ = dotenvy::dotenv();

    let config = NarratorConfig::load();

    match &config.input {
        InputSource::Args(notation) => run_once(notation, config.format),
        InputSource::File(path) => {
            info!(path = %path.display(), "Reading notation from file");
            let notation = fs::read_to_string(path)?;
            run_once(&notation, config.format)
        }
        InputSource::Stdin => run_interactive(config.format),
    }
}

/// One-shot mode: a parse failure ends the run with a nonzero exit.
fn run_once(notation: &str, format: OutputFormat) -> anyhow::Result<()> {
    let records = notation_core::read_moves(notation)?;
    print_records(&records, format)
}

/// Prompt loop: one notation string per line; report failures and keep going.
fn run_interactive(format: OutputFormat) -> anyhow::Result<()> {
    println!("Enter chess notation:");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match notation_core::read_moves(&line) {
            Ok(records) => print_records(&records, format)?,
            Err(NotationError::GrammarMismatch { unmatched }) => {
                error!(unmatched = ?unmatched, "Failed to parse notation");
            }
        }
    }

    Ok(())
}

fn print_records(records: &[MoveRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Text => {
            for record in records {
                println!("{}", render::describe(record));
            }
        }
    }
    Ok(())
}
