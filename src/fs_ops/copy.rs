//! Copy fallback used when a plain rename is not possible (e.g. across filesystems):
//! - copies into a hidden temp file in the destination directory and fsyncs it
//! - renames the temp file over the final name
//! - removes the source; if that fails the copy is withdrawn so the file stays at its source

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use tracing::debug;

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::util::unique_temp_path;

pub(super) fn copy_then_remove(src: &Path, dest: &Path) -> io::Result<()> {
    let dest_dir = dest.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("destination has no parent: {}", dest.display()),
        )
    })?;

    let tmp = unique_temp_path(dest_dir);
    if let Err(e) = copy_synced(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = try_atomic_move(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::remove_file(src) {
        debug!(src = %src.display(), dest = %dest.display(), "withdrawing copy after failed source removal");
        let _ = fs::remove_file(dest);
        return Err(io_error_with_help("remove original file", src)(e));
    }
    Ok(())
}

fn copy_synced(src: &Path, tmp: &Path) -> io::Result<()> {
    fs::copy(src, tmp).map_err(io_error_with_help("copy to temporary file", tmp))?;
    OpenOptions::new()
        .write(true)
        .open(tmp)
        .and_then(|f| f.sync_all())
        .map_err(io_error_with_help("sync temporary file", tmp))
}
