use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Marker separating the timestamp from the activity text.
pub const DELIMITER: &str = "UTC";

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub activity: String,
}

/// Split `line` on [`DELIMITER`].
///
/// The timestamp is everything before the first marker; the activity runs
/// from there up to the next marker, or to the end of the line. Returns
/// `None` if the marker is absent.
pub fn split_line(line: &str) -> Option<LogEntry> {
    let mut parts = line.split(DELIMITER);
    let timestamp = parts.next()?;
    let activity = parts.next()?;
    Some(LogEntry {
        timestamp: timestamp.to_string(),
        activity: activity.to_string(),
    })
}

/// Like [`split_line`], but a missing marker is an error naming the
/// 1-based `line_no`.
pub fn parse_line(line_no: usize, line: &str) -> Result<LogEntry> {
    let entry = split_line(line)
        .ok_or_else(|| anyhow!("line {}: missing '{}' delimiter", line_no, DELIMITER))?;
    debug!(
        line = line_no,
        timestamp = %entry.timestamp,
        activity = %entry.activity,
        "parsed"
    );
    Ok(entry)
}

/// Parse every line of the file at `path`, in order.
pub fn read_entries(path: impl AsRef<Path>) -> Result<Vec<LogEntry>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;

    let mut entries = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("reading `{}`", path.display()))?;
        let entry = parse_line(i + 1, &line)
            .with_context(|| format!("parsing `{}`", path.display()))?;
        entries.push(entry);
    }
    Ok(entries)
}
