//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler, settles the
//! conflict policy (asking if needed), then runs the engine on a background thread and
//! renders its event stream.

use anyhow::{Result, bail};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use move_it::cli::Args;
use move_it::output as out;
use move_it::{
    Event, MoveEngine, MoveOutcome, OnConflict, OperationSummary, default_config_path,
    load_config, shutdown,
};

use crate::logging::init_tracing;

/// Answer to the conflict question.
enum Decision {
    Overwrite,
    Rename,
    Abort,
}

fn decide(policy: OnConflict) -> Result<Decision> {
    match policy {
        OnConflict::Overwrite => Ok(Decision::Overwrite),
        OnConflict::Rename => Ok(Decision::Rename),
        OnConflict::Ask => {
            if !out::stdin_is_tty() {
                bail!("no conflict policy given; pass --overwrite or --rename");
            }
            loop {
                let answer = out::prompt(
                    "Overwrite existing files in the destination folder, if any? [y]es overwrite / [n]o rename / [a]bort:",
                )?;
                match answer.as_str() {
                    "y" | "yes" => return Ok(Decision::Overwrite),
                    "n" | "no" => return Ok(Decision::Rename),
                    "a" | "abort" | "" => return Ok(Decision::Abort),
                    _ => out::print_warn("Please answer y, n or a."),
                }
            }
        }
    }
}

/// Render the event stream. Returns the summary if the operation ran, or the rejection reason.
fn render(events: impl Iterator<Item = Event>, dest: &str) -> Result<OperationSummary> {
    for ev in events {
        match ev {
            Event::Rejected { reason } => {
                out::print_error(&reason);
                bail!(reason);
            }
            Event::FileLogged { outcome } => match &outcome {
                MoveOutcome::Moved { final_filename } => out::print_moved(final_filename, None, dest),
                MoveOutcome::Renamed {
                    original_filename,
                    final_filename,
                } => out::print_moved(original_filename, Some(final_filename), dest),
                MoveOutcome::Failed {
                    filename,
                    error_detail,
                } => out::print_error(&format!("Error moving {filename}: {error_detail}")),
            },
            Event::Progress { percent } => out::print_progress(percent),
            Event::Completed { summary } => return Ok(summary),
        }
    }
    bail!("move operation ended without a summary")
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    if args.print_config {
        let p = default_config_path()?;
        out::print_info(&format!("move_it config path:\n  {}\n", p.display()));
        if p.exists() {
            out::print_info("A config file exists at that location.");
        } else {
            out::print_info("No config file exists there; built-in defaults are used.");
        }
        return Ok(());
    }

    let mut cfg = load_config().inspect_err(|e| out::print_error(&format!("{e:#}")))?;
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // The guard is dropped on Ctrl-C too, so buffered log lines reach the file.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing the current file and stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })?;
    }

    debug!(?args, ?cfg, "Starting move_it");

    let result = (|| -> Result<()> {
        let overwrite = match decide(cfg.on_conflict)? {
            Decision::Overwrite => true,
            Decision::Rename => false,
            Decision::Abort => {
                out::print_info("File moving operation aborted.");
                return Ok(());
            }
        };

        let request = args.to_request(&cfg, overwrite);
        let dest = request.destination_root.display().to_string();
        let engine = Arc::new(MoveEngine::new());
        let summary = render(engine.start_move(request).into_iter(), &dest)?;

        if !summary.any_match_found {
            out::print_warn("No files with such extension found.");
        } else {
            out::print_success(&format!(
                "Files moved successfully ! ({} files)",
                summary.moved_count
            ));
        }
        if summary.cancelled {
            out::print_warn(&format!(
                "Stopped early: {} of {} files moved.",
                summary.moved_count, summary.total_matched
            ));
        }
        if summary.failed_count > 0 {
            error!(failed = summary.failed_count, "Some files could not be moved");
            bail!("{} file(s) could not be moved", summary.failed_count);
        }
        Ok(())
    })();

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
