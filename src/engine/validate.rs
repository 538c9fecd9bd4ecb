//! Request validation.
//! Runs before any traversal; a rejected request never touches the filesystem.

use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::errors::MoveItError;

use super::types::MoveRequest;

/// Check preconditions in order: both paths given, paths distinct, source is a
/// directory, destination is a directory, destination not nested in the source.
pub fn validate_request(req: &MoveRequest) -> Result<(), MoveItError> {
    let src = &req.source_root;
    let dest = &req.destination_root;

    if src.as_os_str().is_empty() || dest.as_os_str().is_empty() {
        return Err(reject(MoveItError::MissingPaths));
    }

    let src_real = real_path(src);
    let dest_real = real_path(dest);
    if src == dest || src_real == dest_real {
        return Err(reject(MoveItError::IdenticalPaths));
    }

    if !src.is_dir() {
        return Err(reject(MoveItError::SourceMissing(src.clone())));
    }
    if !dest.is_dir() {
        return Err(reject(MoveItError::DestinationMissing(dest.clone())));
    }

    if dest_real.starts_with(&src_real) {
        return Err(reject(MoveItError::DestinationInsideSource {
            src: src.clone(),
            dest: dest.clone(),
        }));
    }

    debug!(src = %src_real.display(), dest = %dest_real.display(), "Request validated");
    Ok(())
}

/// Canonical form when resolvable (symlinks, "dir/" vs "dir"), else the path as given.
fn real_path(p: &Path) -> PathBuf {
    dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}

fn reject(e: MoveItError) -> MoveItError {
    error!(code = e.code(), kind = e.kind(), "{e}");
    e
}
