//! Tracing initialization.
//! Builds a registry with a console layer and an optional file layer (the durable operation log).
//!
//! Behavior:
//! - Console verbosity follows LogLevel; at `normal` only warnings reach the console, since the
//!   per-file log lines are already printed by the output module.
//! - The file layer records at least INFO so every moved/failed file lands in the log file.
//! - JSON/non-JSON formatting is selected via the `json` flag and applies to both layers.
//! - File logging is refused if any ancestor of the file path is a symlink.

use anyhow::{Context, Result};
use chrono::Local;
use move_it::output as out;
use move_it::platform::open_log_file_secure_append;
use move_it::{LogLevel, default_log_path, path_has_symlink_ancestor};
use std::fmt as stdfmt;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, Registry, registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

#[inline]
fn console_level(lvl: &LogLevel) -> &'static str {
    match lvl {
        LogLevel::Quiet => "error",
        LogLevel::Normal => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "trace",
    }
}

#[inline]
fn file_level(lvl: &LogLevel) -> &'static str {
    match lvl {
        LogLevel::Quiet | LogLevel::Normal | LogLevel::Info => "info",
        LogLevel::Debug => "trace",
    }
}

fn fmt_layer<W>(writer: W, json: bool, ansi: bool, level: &str) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tsfmt::layer()
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(ansi)
        .with_writer(writer);
    let filter = EnvFilter::new(level);
    if json {
        layer.json().with_filter(filter).boxed()
    } else {
        layer.compact().with_filter(filter).boxed()
    }
}

/// Try to open a non-blocking file writer for logging:
/// - Refuse if any ancestor is a symlink (prints a warning and returns None)
/// - Open file for append and wrap with non_blocking
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing to enable file logging: ancestor of {} is a symlink",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Error checking log path {} for symlinks: {}",
                path.display(),
                e
            ));
            return None;
        }
        Ok(false) => {}
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!("Failed to open log file {}: {}", path.display(), e));
            None
        }
    }
}

/// Initialize tracing. Returns the WorkerGuard of the file appender, if any; it must be
/// held until shutdown so buffered log lines are flushed.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let console_ansi = !json && atty::is(atty::Stream::Stderr);
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(
        std::io::stderr,
        json,
        console_ansi,
        console_level(lvl),
    )];

    let mut guard = None;
    if let Some(path) = log_file {
        if let Some((writer, g)) = maybe_open_non_blocking_writer(path) {
            layers.push(fmt_layer(writer, json, false, file_level(lvl)));
            guard = Some(g);
        } else {
            out::print_warn(&format!(
                "Requested file logging to '{}' was not enabled. Check that the directory is writable and that no ancestor is a symlink. The operation log still goes to the console.",
                path.display()
            ));
            if let Ok(def) = default_log_path() {
                out::print_info(&format!(
                    "You can try using the default log path instead: {}",
                    def.display()
                ));
            }
        }
    }

    registry()
        .with(layers)
        .try_init()
        .context("install tracing subscriber")?;
    Ok(guard)
}
