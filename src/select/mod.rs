// src/select/mod.rs

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use glob::{glob_with, MatchOptions, Pattern};
use std::{fs, path::Path, path::PathBuf};
use tracing::{debug, warn};

/// The newest file found by [`latest_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestFile {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
}

/// Find the most recently modified regular file in `dir` matching `pattern`.
///
/// Hidden files only match when the pattern spells out the leading dot.
/// Equal timestamps resolve to the greatest path.
pub fn latest_file(dir: impl AsRef<Path>, pattern: &str) -> Result<LatestFile> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        bail!("log directory is empty");
    }
    let full = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), pattern);
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut best: Option<LatestFile> = None;
    for entry in glob_with(&full, options)
        .with_context(|| format!("Failed to read glob pattern '{}'", full))?
    {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let meta = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %path.display(), "skipping, no metadata: {}", e);
                continue;
            }
        };
        if !meta.is_file() {
            debug!(path = %path.display(), "skipping non-file");
            continue;
        }
        let modified: DateTime<Utc> = meta
            .modified()
            .with_context(|| format!("reading mtime of `{}`", path.display()))?
            .into();

        let newer = match &best {
            None => true,
            Some(b) => (modified, &path) > (b.modified, &b.path),
        };
        if newer {
            best = Some(LatestFile { path, modified });
        }
    }

    best.ok_or_else(|| {
        anyhow!(
            "no log files found matching '{}' in `{}`",
            pattern,
            dir.display()
        )
    })
}
