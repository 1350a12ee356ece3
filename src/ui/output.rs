//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Command results and failures are line-oriented text on stdout, which is
//! what scripts read. Diagnostics (`[debug]`, `warning:`) go to stderr so
//! they never mix into that stream.
//!
//! Result lines are written with `writeln!` rather than `println!` so a
//! reader that goes away early (`gitmini ls branches | head -1`) surfaces
//! as an `io::Error` the caller can handle instead of a panic.

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - diagnostics on stderr
    Debug,
}

impl Verbosity {
    /// Create verbosity from the debug flag.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a result line to stdout.
pub fn print(message: impl Display) -> io::Result<()> {
    write_line(&mut io::stdout().lock(), message)
}

/// Write one result line to `out`.
pub fn write_line<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning message.
pub fn warn(message: impl Display) {
    eprintln!("warning: {}", message);
}

/// Format a collaborator failure as a single `error:` line.
pub fn format_error(message: impl Display) -> String {
    let text = message.to_string();
    format!("error: {}", text.lines().collect::<Vec<_>>().join(" "))
}
