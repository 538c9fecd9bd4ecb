//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - SOURCE and DEST are optional at the parser level so a missing folder is reported
//!   by the engine's own validation, like any other rejected request.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, OnConflict};
use crate::engine::MoveRequest;

/// Move files matching a set of extensions from a folder tree into one flat folder.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Move it! Move matching files out of a folder tree (Rust)")]
pub struct Args {
    /// Folder to collect files from (searched recursively).
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Folder that receives the files (flat; subfolders are not recreated).
    #[arg(value_name = "DEST", value_hint = ValueHint::DirPath)]
    pub destination: Option<PathBuf>,

    /// Comma-separated extensions, e.g. "jpg, mp3". Empty moves every file.
    #[arg(short = 'e', long = "ext", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Overwrite files that already exist in the destination.
    #[arg(long, conflicts_with = "rename")]
    pub overwrite: bool,

    /// Keep existing destination files; moved duplicates get a "_n" suffix.
    #[arg(long)]
    pub rename: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Append the operation log to this file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where move_it will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by move_it and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Some(ext) = &self.extensions {
            cfg.extensions = ext.clone();
        }
        if self.overwrite {
            cfg.on_conflict = OnConflict::Overwrite;
        } else if self.rename {
            cfg.on_conflict = OnConflict::Rename;
        }
    }

    /// Build the engine request. Missing folders become empty paths, which the engine rejects.
    pub fn to_request(&self, cfg: &Config, overwrite: bool) -> MoveRequest {
        let src = self.source.as_deref().map(sanitize_path).unwrap_or_default();
        let dest = self
            .destination
            .as_deref()
            .map(sanitize_path)
            .unwrap_or_default();
        MoveRequest::new(src, dest, &cfg.extensions).overwrite(overwrite)
    }
}

fn sanitize_path(p: &std::path::Path) -> PathBuf {
    sanitize_str(&p.to_string_lossy())
}

/// Strip surrounding whitespace and quotes left behind by copy-pasted paths.
fn sanitize_str(s: &str) -> PathBuf {
    let trimmed = s.trim();
    let inner = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    PathBuf::from(inner)
}

pub fn parse() -> Args {
    Args::parse()
}
