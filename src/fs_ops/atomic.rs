//! Rename helper.
//! - Replaces an existing destination file on every platform (std renames with
//!   MOVEFILE_REPLACE_EXISTING on Windows), so the old file is never removed first.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

use super::helpers::io_error_with_help;

pub(super) fn try_atomic_move(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst).map_err(io_error_with_help("rename", src))?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed fsync must not turn a completed rename into a failure.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
