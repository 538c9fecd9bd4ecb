//! Request, outcome, summary and event types exchanged with the presentation layer.

use std::path::{Path, PathBuf};

use crate::fs_ops::{ConflictPolicy, ExtensionSet};

/// Everything one move operation needs. Immutable once the operation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    /// Raw filter entries as typed by the user (mixed case and whitespace allowed).
    pub extension_filter: Vec<String>,
    pub overwrite: bool,
}

impl MoveRequest {
    /// Build a request from the raw comma-separated filter text ("jpg, mp3").
    /// Conflicts are renamed unless `.overwrite(true)` is set.
    pub fn new(
        source_root: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
        filter_text: &str,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            extension_filter: filter_text.split(',').map(str::to_owned).collect(),
            overwrite: false,
        }
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn extension_set(&self) -> ExtensionSet {
        ExtensionSet::parse(&self.extension_filter)
    }

    pub fn policy(&self) -> ConflictPolicy {
        ConflictPolicy::from_overwrite(self.overwrite)
    }
}

/// Result of processing one matched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        final_filename: String,
    },
    Renamed {
        original_filename: String,
        final_filename: String,
    },
    Failed {
        filename: String,
        error_detail: String,
    },
}

impl MoveOutcome {
    /// Name of the file as it was found in the source tree.
    pub fn filename(&self) -> &str {
        match self {
            MoveOutcome::Moved { final_filename } => final_filename,
            MoveOutcome::Renamed {
                original_filename, ..
            } => original_filename,
            MoveOutcome::Failed { filename, .. } => filename,
        }
    }

    /// Name the file ended up with, if it moved.
    pub fn final_filename(&self) -> Option<&str> {
        match self {
            MoveOutcome::Moved { final_filename } | MoveOutcome::Renamed { final_filename, .. } => {
                Some(final_filename)
            }
            MoveOutcome::Failed { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, MoveOutcome::Failed { .. })
    }
}

/// Terminal report of one operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationSummary {
    /// Matched files, fixed before the first move.
    pub total_matched: usize,
    /// Files that reached the destination (renamed ones included).
    pub moved_count: usize,
    pub any_match_found: bool,
    pub failed_count: usize,
    /// True when the run stopped early on a cancel request.
    pub cancelled: bool,
}

/// Stream items delivered to the consumer of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Rejected { reason: String },
    Progress { percent: u8 },
    FileLogged { outcome: MoveOutcome },
    Completed { summary: OperationSummary },
}

/// Coordinator lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Counting,
    Moving,
    Completed,
    Rejected,
}

impl Phase {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Phase::Validating | Phase::Counting | Phase::Moving)
    }
}

/// Integer percent of `done` over `total`, rounded. None when there is nothing to count.
pub fn progress_percent(done: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let pct = (done as f64 / total as f64 * 100.0).round();
    Some(pct.clamp(0.0, 100.0) as u8)
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
