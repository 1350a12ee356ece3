//! cli
//!
//! Command-line interface layer for gitmini.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build the execution [`Context`]
//! - Delegate to command handlers
//! - Turn every failure into one output line and exit status 1
//!
//! # Architecture
//!
//! Handlers return `anyhow::Result<()>` and never exit the process.
//! [`run_from`] is the only place that decides the exit status.

pub mod args;
pub mod commands;
pub mod context;

pub use args::{Cli, Command};
pub use context::Context;

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use thiserror::Error;

use crate::core::config::Config;
use crate::ui::output;

/// Usage errors detected by gitmini itself.
///
/// These print verbatim, without the `error:` prefix used for Git failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// The first argument is not a known subcommand.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A ref-type argument is not in the keyword table.
    #[error("Unknown ref type: {0}")]
    UnknownRefType(String),
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run the CLI against an explicit argument vector.
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::parse_from_args(args) {
        Ok(cli) => cli,
        Err(err) => return clap_exit(err),
    };

    let ctx = Context::new(cli.cwd.clone(), cli.debug, load_config());
    if let Some(path) = ctx.config.path() {
        ctx.debug(format!("loaded config from {}", path.display()));
    }

    match commands::dispatch(cli.command_or_default(), &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        // The reader hung up (`gitmini ls branches | head -1`); nothing left to say.
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Print a command failure in its one-line form.
pub fn report(err: &anyhow::Error) {
    // If stdout is gone the exit status is all that is left to report.
    let _ = output::print(failure_line(err));
}

/// Whether a failure was caused by stdout being closed under us.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io| io.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// The line printed for a failed command.
pub fn failure_line(err: &anyhow::Error) -> String {
    match err.downcast_ref::<UsageError>() {
        Some(usage) => usage.to_string(),
        None => output::format_error(format!("{:#}", err)),
    }
}

/// Config problems never block a command; they degrade to defaults.
fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(err) => {
            output::warn(format!("{}; using defaults", err));
            Config::default()
        }
    }
}

/// `--help` and `--version` succeed; every other clap error is a usage failure.
fn clap_exit(err: clap::Error) -> ExitCode {
    // Nothing useful can be done if stdout/stderr are gone.
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
