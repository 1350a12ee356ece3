//! checkout command - Check out a branch or tag by short name

use crate::cli::context::Context;
use crate::core::types::{RefKind, RefName};
use crate::git::{CheckoutMode, Git, GitError, RefEntry};
use anyhow::Result;

/// Check out `ref_name`, preferring the branch over a tag of the same name.
///
/// Resolution finishes before the worktree is touched, so an unknown name
/// leaves the repository exactly as it was.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `ref_name` - Short branch or tag name
pub fn checkout(ctx: &Context, ref_name: &str) -> Result<()> {
    let cwd = ctx.work_dir()?;
    ctx.debug(format!("opening repository at {}", cwd.display()));
    let git = Git::open(&cwd)?;

    let target = resolve_branch_or_tag(&git, ref_name)?;
    ctx.debug(format!("resolved {} to {}", ref_name, target));

    let mode = CheckoutMode::from_force(ctx.config.checkout_force());
    git.checkout(&target.name, mode)?;

    ctx.debug(format!("checked out {} ({:?})", target.name, mode));
    Ok(())
}

/// Resolve `ref_name` as `refs/heads/<ref_name>`, then `refs/tags/<ref_name>`.
pub fn resolve_branch_or_tag(git: &Git, ref_name: &str) -> Result<RefEntry, GitError> {
    resolve_with_fallback(ref_name, |name| git.resolve_reference(name))
}

/// The branch-then-tag lookup, independent of where refs come from.
///
/// Any failure of the branch lookup triggers exactly one fallback to the
/// tag namespace. If that fails too, its error is the one returned.
pub fn resolve_with_fallback<F>(ref_name: &str, lookup: F) -> Result<RefEntry, GitError>
where
    F: Fn(&RefName) -> Result<RefEntry, GitError>,
{
    let attempt = |kind: RefKind| -> Result<RefEntry, GitError> {
        let name = RefName::within(kind, ref_name)?;
        lookup(&name)
    };

    attempt(RefKind::Branches).or_else(|_| attempt(RefKind::Tags))
}
