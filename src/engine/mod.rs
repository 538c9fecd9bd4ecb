//! Move engine: request validation, counting, and the per-file move loop.

mod coordinator;
pub(crate) mod types;
mod validate;

pub use coordinator::MoveEngine;
pub use types::{Event, MoveOutcome, MoveRequest, OperationSummary, Phase, progress_percent};
pub use validate::validate_request;
