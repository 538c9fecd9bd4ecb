//! Single-file move.
//! Creates the destination directory if needed, renames the file into place and falls
//! back to copy+remove when the rename crosses a filesystem boundary.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::engine::MoveOutcome;
use crate::engine::types::display_name;

use super::atomic::try_atomic_move;
use super::copy::copy_then_remove;
use super::helpers::io_error_with_help;
use super::util::is_cross_device;
use super::walker::Candidate;

/// Move `candidate` to `dest` and classify the result. Never panics, never aborts the batch.
pub fn execute(candidate: &Candidate, dest: &Path) -> MoveOutcome {
    let original = candidate.filename();
    match relocate(&candidate.absolute_path, dest) {
        Ok(()) => {
            let final_name = display_name(dest);
            info!(src = %candidate.absolute_path.display(), dest = %dest.display(), "Moved file");
            if final_name == original {
                MoveOutcome::Moved {
                    final_filename: final_name,
                }
            } else {
                MoveOutcome::Renamed {
                    original_filename: original,
                    final_filename: final_name,
                }
            }
        }
        Err(e) => {
            warn!(src = %candidate.absolute_path.display(), dest = %dest.display(), error = %e, "Failed to move file");
            MoveOutcome::Failed {
                filename: original,
                error_detail: e.to_string(),
            }
        }
    }
}

fn relocate(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(io_error_with_help("create destination directory", parent))?;
    }

    match try_atomic_move(src, dest) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "Rename crossed filesystems, using copy+remove");
            copy_then_remove(src, dest)
        }
        Err(e) => Err(e),
    }
}
