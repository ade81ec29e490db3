//! Turn the newest `UTC`-stamped log file in a directory into a script of
//! `CALL add_logs_data(...)` statements.

pub mod config;
pub mod emit;
pub mod select;
pub mod transform;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::config::Config;

/// What a [`run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub statements: usize,
}

/// Select the latest log, parse it, and write the SQL script.
///
/// The output is only touched once every line has parsed.
#[instrument(level = "info", skip(cfg), fields(dir = %cfg.log_dir.display()))]
pub fn run(cfg: &Config) -> Result<RunSummary> {
    let latest = select::latest_file(&cfg.log_dir, &cfg.pattern)?;
    info!(file = %latest.path.display(), modified = %latest.modified, "selected latest log");

    let entries = transform::read_entries(&latest.path)?;
    let statements = emit::write_calls(&cfg.output, &entries)?;
    info!("wrote {} statements → {}", statements, cfg.output.display());

    Ok(RunSummary {
        source: latest.path,
        output: cfg.output.clone(),
        statements,
    })
}
