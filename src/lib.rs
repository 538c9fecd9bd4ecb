//! Core library for `move_it`.
//!
//! Moves every file under a source tree whose name ends with one of a set of
//! extensions into a single flat destination folder. Name clashes are either
//! overwritten or resolved with a numeric suffix. One bad file never stops the batch.
//!
//! The engine reports progress as a stream of [`Event`]s, so any front end (the
//! bundled CLI, a GUI, a test) can render it.
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use config::{
    CONFIG_ENV, Config, LogLevel, OnConflict, default_config_path, default_log_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use engine::{Event, MoveEngine, MoveOutcome, MoveRequest, OperationSummary, Phase};
pub use errors::MoveItError;
pub use fs_ops::{Candidate, ConflictPolicy, ExtensionSet, execute, matches, resolve, walk};

/// Commonly used items for front ends.
pub mod prelude {
    pub use crate::config::{Config, LogLevel, OnConflict, default_config_path};
    pub use crate::engine::{Event, MoveEngine, MoveOutcome, MoveRequest, OperationSummary, Phase};
    pub use crate::errors::MoveItError;
    pub use crate::fs_ops::{ConflictPolicy, ExtensionSet, matches, resolve, walk};
    pub use crate::shutdown::request as request_shutdown;
}
