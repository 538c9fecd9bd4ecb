//! Typed error definitions for move_it.
//! Each variant is a distinct reason an operation is rejected before any file is touched.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveItError {
    #[error("Please provide source folder and destination folder.")]
    MissingPaths,

    #[error("Source and destination folders cannot be the same (identical paths).")]
    IdenticalPaths,

    #[error("Source folder does not exist: {0}")]
    SourceMissing(PathBuf),

    #[error("Destination folder does not exist: {0}")]
    DestinationMissing(PathBuf),

    #[error("Destination folder {dest} is inside the source folder {src}")]
    DestinationInsideSource { src: PathBuf, dest: PathBuf },

    #[error("Another move operation is already running")]
    Busy,
}

impl MoveItError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u8 {
        match self {
            MoveItError::MissingPaths => 10,
            MoveItError::IdenticalPaths => 11,
            MoveItError::SourceMissing(_) => 12,
            MoveItError::DestinationMissing(_) => 13,
            MoveItError::DestinationInsideSource { .. } => 14,
            MoveItError::Busy => 20,
        }
    }

    /// Short machine-friendly kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveItError::MissingPaths => "missing_paths",
            MoveItError::IdenticalPaths => "identical_paths",
            MoveItError::SourceMissing(_) => "source_missing",
            MoveItError::DestinationMissing(_) => "destination_missing",
            MoveItError::DestinationInsideSource { .. } => "destination_inside_source",
            MoveItError::Busy => "busy",
        }
    }
}
