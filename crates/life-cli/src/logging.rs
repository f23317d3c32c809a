//! Logger setup for the `life` binary

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;

/// Parses a level name, falling back to `warn` on anything unrecognized.
pub fn level_filter(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Initializes env_logger once. With a log file, output is redirected there
/// so the board stays clean.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter(level));

    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .context("Failed to initialize logger")
}
