//! User-facing console output: the per-file operation log, the summary line and
//! warnings. Colors only when the stream is a TTY.

use owo_colors::OwoColorize;
use std::io::{self, Write};

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// "Moved <file> to <dest>" / "Moved <file> as <new> in <dest>".
pub fn print_moved(file: &str, renamed_to: Option<&str>, dest: &str) {
    let tty = stdout_tty();
    match renamed_to {
        Some(new) if tty => println!(
            "Moved {} as {} in {}",
            file.bright_yellow(),
            new.bright_blue(),
            dest.bright_blue()
        ),
        Some(new) => println!("Moved {} as {} in {}", file, new, dest),
        None if tty => println!("Moved {} to {}", file.bright_yellow(), dest.bright_blue()),
        None => println!("Moved {} to {}", file, dest),
    }
}

/// Redraw an in-place percent indicator on stderr. Nothing is drawn when stderr is not a TTY.
pub fn print_progress(percent: u8) {
    if !stderr_tty() {
        return;
    }
    let mut err = io::stderr();
    let _ = write!(err, "\r{:>3}%", percent);
    if percent >= 100 {
        let _ = writeln!(err);
    }
    let _ = err.flush();
}

/// Ask a question on stdout and read one trimmed, lowercased answer from stdin.
pub fn prompt(question: &str) -> io::Result<String> {
    let mut out = io::stdout();
    write!(out, "{} ", question)?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_ascii_lowercase())
}

pub fn stdin_is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}
