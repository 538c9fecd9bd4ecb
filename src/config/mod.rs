//! Config module.
//! Provides configuration types, default paths and XML loading for the CLI shell.
//! The engine itself takes everything it needs from a `MoveRequest`.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, OnConflict};
pub use xml::{load_config, load_config_from_xml_path};
