//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path, and a platform-aware hint so
//! per-file failures are actionable when they show up in the operation log.
//!
//! Usage:
//!   // in functions returning io::Result<_>
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create destination directory", dir))?;

use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and write permissions");
                }
                libc::EXDEV => {
                    msg.push_str("; cross-filesystem, atomic rename not possible");
                }
                libc::EBUSY => {
                    msg.push_str("; resource busy, ensure no other process is writing");
                }
                libc::ENOENT => {
                    msg.push_str("; path not found, it may have been removed during the move");
                }
                libc::EISDIR => {
                    msg.push_str("; a directory already occupies the destination name");
                }
                libc::ENOSPC => {
                    msg.push_str("; insufficient space on device");
                }
                libc::EROFS => {
                    msg.push_str("; read-only filesystem");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str("; filename or path too long");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions"), // ERROR_ACCESS_DENIED
                17 => msg.push_str("; not same device, cross-filesystem move"), // ERROR_NOT_SAME_DEVICE
                32 => msg.push_str("; sharing violation, file is in use"), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str("; path not found"),
                112 => msg.push_str("; insufficient disk space"), // ERROR_DISK_FULL
                206 => msg.push_str("; filename or path too long"), // ERROR_FILENAME_EXCED_RANGE
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str("; permission denied, check ownership and write permissions");
            }
            io::ErrorKind::NotFound => {
                msg.push_str("; path not found");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for io::Result code: keeps the original ErrorKind, enriches the message.
pub(crate) fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
