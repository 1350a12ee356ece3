//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments (ref-type keywords first, so a bad
//!    keyword never reaches the network or the filesystem)
//! 2. Makes exactly one call into [`crate::git`]
//! 3. Prints its result lines
//!
//! Handlers return errors; they never exit the process.

mod checkout;
mod clone;
mod ls;
mod ls_remote;
mod version;

// Re-export command functions for testing and direct invocation
pub use checkout::{checkout, resolve_branch_or_tag, resolve_with_fallback};
pub use clone::clone;
pub use ls::{ls, local_ref_names};
pub use ls_remote::{ls_remote, remote_ref_lines};
pub use version::{version, version_string};

use crate::cli::args::Command;
use crate::cli::context::Context;
use crate::cli::UsageError;
use crate::core::types::RefKind;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Version => version::version(),
        Command::Clone { url, directory } => clone::clone(ctx, &url, &directory),
        Command::Checkout { ref_name } => checkout::checkout(ctx, &ref_name),
        Command::LsRemote { ref_type, url } => ls_remote::ls_remote(ctx, &ref_type, &url),
        Command::Ls { ref_type } => ls::ls(ctx, &ref_type),
        Command::External(args) => {
            let name = args.into_iter().next().unwrap_or_default();
            Err(UsageError::UnknownCommand(name).into())
        }
    }
}

/// Map a ref-type keyword to its kind, or fail with a usage error.
pub fn parse_ref_kind(keyword: &str) -> Result<RefKind, UsageError> {
    RefKind::from_keyword(keyword).ok_or_else(|| UsageError::UnknownRefType(keyword.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ref_kind_known() {
        assert_eq!(parse_ref_kind("--tags"), Ok(RefKind::Tags));
        assert_eq!(parse_ref_kind("branches"), Ok(RefKind::Branches));
    }

    #[test]
    fn parse_ref_kind_unknown() {
        assert_eq!(
            parse_ref_kind("remotes"),
            Err(UsageError::UnknownRefType("remotes".into()))
        );
    }

    #[test]
    fn external_command_is_unknown() {
        let err = dispatch(
            Command::External(vec!["push".into(), "origin".into()]),
            &Context::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<UsageError>(),
            Some(&UsageError::UnknownCommand("push".into()))
        );
    }

    #[test]
    fn version_dispatches() {
        assert!(dispatch(Command::Version, &Context::default()).is_ok());
    }
}
