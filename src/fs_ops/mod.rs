//! Filesystem operations: matching, traversal, name resolution and the per-file move.

mod atomic;
mod collision;
mod copy;
mod executor;
mod helpers;
mod matcher;
mod util;
mod walker;

pub use collision::{ConflictPolicy, resolve};
pub use executor::execute;
pub use matcher::{ExtensionSet, matches};
pub use walker::{Candidate, walk};
