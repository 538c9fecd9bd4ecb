//! Destination name resolution.
//!
//! Policy:
//! - Overwrite: the requested name is returned as-is; the executor replaces any existing file.
//! - Rename: if the name is taken, probe "stem_1.ext", "stem_2.ext", ... and return the first free one.
//!
//! Notes:
//! - The probe is a point-in-time existence check. A file created by another process between
//!   the probe and the move is not guarded against.
//! - Stem/extension split follows `Path::file_stem`/`Path::extension`: "archive.tar.gz" becomes
//!   "archive.tar_1.gz", a dotfile such as ".env" becomes ".env_1", a name without a dot gets no extension.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use tracing::trace;

/// How an existing file at the destination name is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Keep the requested name and replace whatever is there.
    Overwrite,
    /// Pick the first free "stem_n.ext" name.
    Rename,
}

impl ConflictPolicy {
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            ConflictPolicy::Overwrite
        } else {
            ConflictPolicy::Rename
        }
    }
}

/// Compute the final file name inside `dest_dir` for `name` under `policy`.
pub fn resolve(dest_dir: &Path, name: &OsStr, policy: ConflictPolicy) -> OsString {
    match policy {
        ConflictPolicy::Overwrite => name.to_os_string(),
        ConflictPolicy::Rename => {
            if !dest_dir.join(name).exists() {
                return name.to_os_string();
            }
            unique_with_numeric_suffix(dest_dir, name)
        }
    }
}

fn unique_with_numeric_suffix(dest_dir: &Path, name: &OsStr) -> OsString {
    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| name.to_os_string());
    let ext: Option<&OsStr> = base.extension();

    let mut n: u64 = 1;
    loop {
        let candidate = name_with_counter(&stem, ext, n);
        if !dest_dir.join(&candidate).exists() {
            return candidate;
        }
        if n % 100 == 0 {
            trace!(name = ?name, dir = %dest_dir.display(), tried = n, "collision: still probing for a free name");
        }
        n += 1;
    }
}

fn name_with_counter(stem: &OsStr, ext: Option<&OsStr>, n: u64) -> OsString {
    let mut out = OsString::with_capacity(stem.len() + 8);
    out.push(stem);
    out.push(format!("_{n}"));
    if let Some(e) = ext {
        out.push(".");
        out.push(e);
    }
    out
}
