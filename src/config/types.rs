//! Core configuration types.
//! - Config holds CLI-shell settings with sensible defaults.
//! - LogLevel and OnConflict are parsed case-insensitively from config/CLI strings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// What to do when a file with the same name already exists in the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnConflict {
    /// Replace the existing file.
    Overwrite,
    /// Keep both: the moved file gets a "_n" suffix.
    Rename,
    /// Prompt before starting (yes = overwrite, no = rename, abort = do nothing).
    #[default]
    Ask,
}

impl OnConflict {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" | "yes" => Some(OnConflict::Overwrite),
            "rename" | "no" => Some(OnConflict::Rename),
            "ask" | "prompt" => Some(OnConflict::Ask),
            _ => None,
        }
    }
}

impl fmt::Display for OnConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OnConflict::Overwrite => "overwrite",
            OnConflict::Rename => "rename",
            OnConflict::Ask => "ask",
        };
        f.write_str(s)
    }
}

impl FromStr for OnConflict {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid conflict policy: '{s}'"))
    }
}

/// Settings for the command-line shell around the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Durable operation log; None only when no user data directory is known
    pub log_file: Option<PathBuf>,
    /// Default comma-separated extension filter, used when --ext is not given
    pub extensions: String,
    /// Default conflict handling, used when neither --overwrite nor --rename is given
    pub on_conflict: OnConflict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path().ok(),
            extensions: String::new(),
            on_conflict: OnConflict::Ask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_logs_to_data_dir() {
        let cfg = Config::default();
        let log = cfg.log_file.expect("data dir is known on test hosts");
        assert!(log.ends_with("move_it/move_it.log"), "{}", log.display());
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert_eq!(cfg.on_conflict, OnConflict::Ask);
        assert!(cfg.extensions.is_empty());
    }
}
