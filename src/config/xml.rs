//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file means defaults; a malformed file or an unknown tag is an error.
//!
//! Example:
//! <config>
//!   <log_level>normal</log_level>
//!   <log_file>/var/log/move_it.log</log_file>
//!   <extensions>jpg, png</extensions>
//!   <on_conflict>rename</on_conflict>
//! </config>

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel, OnConflict};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    extensions: Option<String>,
    on_conflict: Option<String>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

// Map XmlConfig -> Config; absent or blank tags keep defaults (log_file falls back to the data dir).
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(|e| anyhow!(e))?;
    }
    if let Some(s) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(s));
    }
    if let Some(s) = parsed.extensions.as_deref() {
        cfg.extensions = s.trim().to_string();
    }
    if let Some(s) = non_empty(parsed.on_conflict.as_deref()) {
        cfg.on_conflict = s.parse::<OnConflict>().map_err(|e| anyhow!(e))?;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Load the config from the default location, falling back to defaults when no file exists.
pub fn load_config() -> Result<Config> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(Config::default());
    }
    load_config_from_xml_path(&path)
}
