use crate::transform::LogEntry;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Double single quotes so the value is safe inside a SQL string literal.
pub fn escape_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// Render `entry` as a call to the `add_logs_data` stored procedure.
pub fn format_call(entry: &LogEntry) -> String {
    format!(
        "CALL add_logs_data('{}', '{}');",
        escape_literal(&entry.timestamp),
        escape_literal(&entry.activity)
    )
}

/// Truncate `path` and write one statement per entry. Returns the number written.
pub fn write_calls(path: impl AsRef<Path>, entries: &[LogEntry]) -> Result<usize> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("creating output file `{}`", path.display()))?;
    let mut writer = BufWriter::new(file);
    for entry in entries {
        writeln!(writer, "{}", format_call(entry))
            .with_context(|| format!("writing `{}`", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing `{}`", path.display()))?;
    Ok(entries.len())
}
