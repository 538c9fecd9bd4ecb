//! Recursive source tree traversal.
//!
//! Order: depth-first, entries of each directory visited in lexical file-name
//! order, descending into a subdirectory when it is reached. Only regular files
//! are yielded. Symlinks are not followed for descent; a link is yielded when it
//! resolves to a regular file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

/// One file discovered under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub absolute_path: PathBuf,
    pub file_name: OsString,
    /// Directory of the file relative to the source root ("" for top-level files).
    pub relative_dir: PathBuf,
}

impl Candidate {
    /// Lossy UTF-8 file name, used for matching and display.
    pub fn filename(&self) -> String {
        self.file_name.to_string_lossy().into_owned()
    }

    fn from_entry(root: &Path, entry: DirEntry) -> Self {
        let file_name = entry.file_name().to_os_string();
        let relative_dir = entry
            .path()
            .parent()
            .and_then(|p| p.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            absolute_path: entry.into_path(),
            file_name,
            relative_dir,
        }
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_file() {
        return true;
    }
    // Follow the link only for the regular-file check.
    ft.is_symlink() && entry.path().is_file()
}

/// Lazily enumerate every regular file under `root`. Each call performs a fresh descent.
pub fn walk(root: &Path) -> impl Iterator<Item = Candidate> + '_ {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |res| match res {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, root = %root.display(), "Skipping unreadable entry during traversal");
                None
            }
        })
        .filter(is_regular_file)
        .map(move |entry| {
            trace!(path = %entry.path().display(), "candidate");
            Candidate::from_entry(root, entry)
        })
}
