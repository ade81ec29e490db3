// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env,
    ffi::OsString,
    fs::File,
    path::{Path, PathBuf},
};

pub const DEFAULT_LOG_DIR: &str = "/home/sadm/IFS/db_docker/logs";
pub const DEFAULT_PATTERN: &str = "*";
pub const DEFAULT_OUTPUT: &str = "load_user_address.sql";

/// Env var naming an optional YAML settings file.
pub const CONFIG_ENV: &str = "LOGCALL_CONFIG";
pub const LOG_DIR_ENV: &str = "LOGCALL_LOG_DIR";
pub const PATTERN_ENV: &str = "LOGCALL_PATTERN";
pub const OUTPUT_ENV: &str = "LOGCALL_OUTPUT";

/// Where to look for logs and where to put the generated SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub pattern: String,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Partial settings as read from YAML; missing keys keep the previous layer.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    log_dir: Option<PathBuf>,
    pattern: Option<String>,
    output: Option<PathBuf>,
}

/// Set-but-empty counts as unset.
fn non_empty_var(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|v| !v.is_empty())
}

impl Config {
    /// Defaults, then `$LOGCALL_CONFIG` (if set), then the individual env vars.
    pub fn load() -> Result<Self> {
        let mut cfg = match non_empty_var(CONFIG_ENV) {
            Some(path) => Self::default().with_file(Path::new(&path))?,
            None => Self::default(),
        };
        cfg.apply_overrides(
            non_empty_var(LOG_DIR_ENV).map(PathBuf::from),
            non_empty_var(PATTERN_ENV).map(|p| p.to_string_lossy().into_owned()),
            non_empty_var(OUTPUT_ENV).map(PathBuf::from),
        );
        Ok(cfg)
    }

    /// Layer the YAML file at `path` over `self`.
    pub fn with_file(mut self, path: &Path) -> Result<Self> {
        let f = File::open(path)
            .with_context(|| format!("opening config file `{}`", path.display()))?;
        let parsed: FileConfig = serde_yaml::from_reader(f)
            .with_context(|| format!("parsing config file `{}`", path.display()))?;
        self.apply_overrides(parsed.log_dir, parsed.pattern, parsed.output);
        Ok(self)
    }

    fn apply_overrides(
        &mut self,
        log_dir: Option<PathBuf>,
        pattern: Option<String>,
        output: Option<PathBuf>,
    ) {
        if let Some(d) = log_dir {
            self.log_dir = d;
        }
        if let Some(p) = pattern {
            self.pattern = p;
        }
        if let Some(o) = output {
            self.output = o;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.log_dir, PathBuf::from("/home/sadm/IFS/db_docker/logs"));
        assert_eq!(cfg.pattern, "*");
        assert_eq!(cfg.output, PathBuf::from("load_user_address.sql"));
    }

    #[test]
    fn test_yaml_overrides_only_given_keys() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("logcall.yaml");
        fs::write(&path, "log_dir: /var/log/app\noutput: out.sql\n")?;

        let cfg = Config::default().with_file(&path)?;
        assert_eq!(cfg.log_dir, PathBuf::from("/var/log/app"));
        assert_eq!(cfg.pattern, "*");
        assert_eq!(cfg.output, PathBuf::from("out.sql"));
        Ok(())
    }

    #[test]
    fn test_overrides_replace_only_given_fields() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("logcall.yaml");
        fs::write(&path, "pattern: \"*.log\"\noutput: from_file.sql\n")?;

        let mut cfg = Config::default().with_file(&path)?;
        cfg.apply_overrides(None, None, Some(PathBuf::from("from_env.sql")));
        assert_eq!(cfg.pattern, "*.log");
        assert_eq!(cfg.output, PathBuf::from("from_env.sql"));
        Ok(())
    }

    #[test]
    fn test_load_reads_env_over_yaml() -> Result<()> {
        // The only test that mutates process env.
        let tmp = tempdir()?;
        let path = tmp.path().join("logcall.yaml");
        fs::write(&path, "log_dir: /srv/logs\npattern: \"*.log\"\noutput: from_file.sql\n")?;

        env::set_var(CONFIG_ENV, &path);
        env::set_var(OUTPUT_ENV, "from_env.sql");
        env::set_var(LOG_DIR_ENV, "");
        env::remove_var(PATTERN_ENV);
        let cfg = Config::load();
        for key in [CONFIG_ENV, OUTPUT_ENV, LOG_DIR_ENV] {
            env::remove_var(key);
        }

        let cfg = cfg?;
        assert_eq!(cfg.log_dir, PathBuf::from("/srv/logs"));
        assert_eq!(cfg.pattern, "*.log");
        assert_eq!(cfg.output, PathBuf::from("from_env.sql"));
        Ok(())
    }

    #[test]
    fn test_bad_yaml_is_an_error() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("logcall.yaml");
        fs::write(&path, "colour: blue\n")?;

        let err = Config::default().with_file(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config file"));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Config::default()
            .with_file(Path::new("/definitely/not/here.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("opening config file"));
    }
}
