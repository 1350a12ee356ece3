//! cli::context
//!
//! Execution context shared by every command handler.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::ui::output::{self, Verbosity};

/// Execution context.
///
/// Built once from global flags and configuration, then passed by
/// reference to the handler.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug diagnostics enabled.
    pub debug: bool,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Combine CLI flags with configuration; a set flag always wins.
    pub fn new(cwd: Option<PathBuf>, debug_flag: bool, config: Config) -> Self {
        let debug = debug_flag || config.debug();
        Self { cwd, debug, config }
    }

    /// The directory commands operate in: `--cwd` or the process directory.
    pub fn work_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("cannot determine current directory"),
        }
    }

    /// Resolve `path` against the working directory when it is relative.
    pub fn resolve_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.work_dir()?.join(path))
        }
    }

    /// Output verbosity for this run.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.debug)
    }

    /// Emit a `[debug]` line when diagnostics are enabled.
    pub fn debug(&self, message: impl std::fmt::Display) {
        output::debug(message, self.verbosity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_cwd_is_work_dir() {
        let ctx = Context::new(Some(PathBuf::from("/tmp/repo")), false, Config::default());
        assert_eq!(ctx.work_dir().unwrap(), PathBuf::from("/tmp/repo"));
    }

    #[test]
    fn relative_paths_join_cwd() {
        let ctx = Context::new(Some(PathBuf::from("/tmp/repo")), false, Config::default());
        assert_eq!(
            ctx.resolve_path(Path::new("clone")).unwrap(),
            PathBuf::from("/tmp/repo/clone")
        );
        assert_eq!(
            ctx.resolve_path(Path::new("/abs/dest")).unwrap(),
            PathBuf::from("/abs/dest")
        );
    }

    #[test]
    fn debug_flag_sets_verbosity() {
        let ctx = Context::new(None, true, Config::default());
        assert_eq!(ctx.verbosity(), Verbosity::Debug);
        let ctx = Context::new(None, false, Config::default());
        assert_eq!(ctx.verbosity(), Verbosity::Normal);
    }
}
