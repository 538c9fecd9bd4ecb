//! Operation coordinator.
//!
//! Lifecycle: Idle -> Validating -> Counting -> Moving -> Completed, or
//! Validating -> Rejected. One operation may be in flight per engine; a second
//! request during Validating/Counting/Moving is rejected as busy.
//!
//! The matched candidate list is materialized once during Counting and reused for
//! Moving, so the progress denominator and the files actually processed agree.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use tracing::{debug, info, warn};

use crate::errors::MoveItError;
use crate::fs_ops::{Candidate, execute, matches, resolve, walk};
use crate::shutdown;

use super::types::{Event, MoveRequest, OperationSummary, Phase, progress_percent};
use super::validate::validate_request;

/// Runs move operations, one at a time.
#[derive(Debug, Default)]
pub struct MoveEngine {
    phase: Mutex<Phase>,
    cancel: AtomicBool,
}

/// Returns the engine to Idle if an operation unwinds before reaching a terminal phase.
struct InFlight<'a>(&'a MoveEngine);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut phase = self.0.lock_phase();
        if phase.is_in_flight() {
            *phase = Phase::Idle;
        }
    }
}

impl MoveEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        *self.lock_phase()
    }

    /// Ask a running operation to stop before its next file. Files already moved stay moved.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Run one operation to completion on the calling thread, delivering events in order.
    ///
    /// Returns the final summary, or the rejection reason (also emitted as `Event::Rejected`).
    pub fn run<F>(&self, request: &MoveRequest, mut on_event: F) -> Result<OperationSummary, MoveItError>
    where
        F: FnMut(Event),
    {
        if let Err(e) = self.try_enter() {
            on_event(Event::Rejected {
                reason: e.to_string(),
            });
            return Err(e);
        }
        self.drive(request, InFlight(self), &mut on_event)
    }

    /// Start an operation on a background thread and return its event stream.
    /// The stream ends after `Rejected` or `Completed`.
    pub fn start_move(self: &Arc<Self>, request: MoveRequest) -> Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        if let Err(e) = self.try_enter() {
            let _ = tx.send(Event::Rejected {
                reason: e.to_string(),
            });
            return rx;
        }

        let engine = Arc::clone(self);
        thread::spawn(move || {
            let guard = InFlight(engine.as_ref());
            // A dropped receiver only means nobody is listening; the move still completes.
            let _ = engine.drive(&request, guard, &mut |ev| {
                let _ = tx.send(ev);
            });
        });
        rx
    }

    fn lock_phase(&self) -> MutexGuard<'_, Phase> {
        self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_phase(&self, next: Phase) {
        let mut phase = self.lock_phase();
        debug!(from = ?*phase, to = ?next, "phase transition");
        *phase = next;
    }

    /// Idle/terminal -> Validating, unless an operation is already in flight.
    fn try_enter(&self) -> Result<(), MoveItError> {
        let mut phase = self.lock_phase();
        if phase.is_in_flight() {
            warn!(phase = ?*phase, "Rejecting request: operation already in flight");
            return Err(MoveItError::Busy);
        }
        debug!(from = ?*phase, to = ?Phase::Validating, "phase transition");
        *phase = Phase::Validating;
        self.cancel.store(false, Ordering::Relaxed);
        Ok(())
    }

    fn cancel_requested(&self) -> bool {
        self.cancel.load(Ordering::Relaxed) || shutdown::is_requested()
    }

    fn drive(
        &self,
        request: &MoveRequest,
        _guard: InFlight<'_>,
        on_event: &mut dyn FnMut(Event),
    ) -> Result<OperationSummary, MoveItError> {
        if let Err(e) = validate_request(request) {
            self.set_phase(Phase::Rejected);
            on_event(Event::Rejected {
                reason: e.to_string(),
            });
            return Err(e);
        }

        self.set_phase(Phase::Counting);
        let set = request.extension_set();
        let matched: Vec<Candidate> = walk(&request.source_root)
            .filter(|c| matches(&c.filename(), &set))
            .collect();

        let mut summary = OperationSummary {
            total_matched: matched.len(),
            any_match_found: !matched.is_empty(),
            ..Default::default()
        };
        info!(
            src = %request.source_root.display(),
            dest = %request.destination_root.display(),
            matched = summary.total_matched,
            overwrite = request.overwrite,
            "Starting move"
        );

        self.set_phase(Phase::Moving);
        let policy = request.policy();
        for candidate in &matched {
            if self.cancel_requested() {
                warn!(moved = summary.moved_count, "Move cancelled; stopping before next file");
                summary.cancelled = true;
                break;
            }

            let final_name = resolve(&request.destination_root, &candidate.file_name, policy);
            let outcome = execute(candidate, &request.destination_root.join(final_name));
            if outcome.is_success() {
                summary.moved_count += 1;
            } else {
                summary.failed_count += 1;
            }
            on_event(Event::FileLogged { outcome });

            if let Some(percent) = progress_percent(summary.moved_count, summary.total_matched) {
                on_event(Event::Progress { percent });
            }
        }

        self.set_phase(Phase::Completed);
        if summary.any_match_found {
            info!(
                moved = summary.moved_count,
                failed = summary.failed_count,
                total = summary.total_matched,
                "Move completed"
            );
        } else {
            info!(filter = ?set.suffixes(), "No files with such extension found");
        }
        on_event(Event::Completed { summary });
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn fresh_engine_is_idle_and_returns_to_terminal_phase() {
        let engine = MoveEngine::new();
        assert_eq!(engine.phase(), Phase::Idle);

        let src = assert_fs::TempDir::new().unwrap();
        let dest = assert_fs::TempDir::new().unwrap();
        src.child("a.txt").touch().unwrap();
        let req = MoveRequest::new(src.path(), dest.path(), "");
        engine.run(&req, |_| {}).unwrap();
        assert_eq!(engine.phase(), Phase::Completed);

        let bad = MoveRequest::new(src.path(), src.path(), "");
        assert!(engine.run(&bad, |_| {}).is_err());
        assert_eq!(engine.phase(), Phase::Rejected);
    }

    #[test]
    fn busy_engine_rejects_second_request() {
        let engine = MoveEngine::new();
        engine.try_enter().unwrap();

        let mut events = Vec::new();
        let req = MoveRequest::new("/a", "/b", "");
        let res = engine.run(&req, |e| events.push(e));
        assert_eq!(res, Err(MoveItError::Busy));
        assert_eq!(
            events,
            vec![Event::Rejected {
                reason: MoveItError::Busy.to_string()
            }]
        );
        assert_eq!(engine.phase(), Phase::Validating, "running operation must be untouched");
    }

    #[test]
    fn cancel_stops_before_next_file() {
        let engine = MoveEngine::new();
        let src = assert_fs::TempDir::new().unwrap();
        let dest = assert_fs::TempDir::new().unwrap();
        src.child("a.txt").touch().unwrap();
        src.child("b.txt").touch().unwrap();

        let req = MoveRequest::new(src.path(), dest.path(), "");
        let summary = engine
            .run(&req, |ev| {
                if let Event::FileLogged { .. } = ev {
                    engine.cancel();
                }
            })
            .unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.total_matched, 2);
        assert_eq!(summary.moved_count, 1, "only the file before the cancel request moves");
        assert!(src.child("b.txt").path().exists());
    }
}
