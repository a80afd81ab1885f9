// translit/src/main.rs
//! translit entry point.
//!
//! Loads the rule table for the selected direction (embedded payload or a
//! custom one from `--rules`), then hands off to the batch runner. A loader
//! failure is fatal: the diagnostic goes to stderr and the process exits
//! non-zero before any line is processed.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;

use translit::cli::Cli;
use translit::commands::batch::run_batch;
use translit::logger;
use translit_core::{
    Direction, TableCache, DEFAULT_CYR2LAT_PAYLOAD, DEFAULT_LAT2CYR_PAYLOAD,
};

fn default_payload(direction: Direction) -> &'static str {
    match direction {
        Direction::Cyr2Lat => DEFAULT_CYR2LAT_PAYLOAD,
        Direction::Lat2Cyr => DEFAULT_LAT2CYR_PAYLOAD,
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let direction: Direction = args.direction.into();

    let payload = match &args.rules {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file {}", path.display()))?,
        None => default_payload(direction).to_string(),
    };

    // Process-lifetime cache: the table is loaded once and reused for
    // every line of this invocation.
    let mut cache = TableCache::new();
    let table = cache
        .get_or_load(&payload, direction.binding_name())
        .with_context(|| format!("Failed to load '{}' rule table", direction))?;

    run_batch(
        &table,
        &args.text,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}
