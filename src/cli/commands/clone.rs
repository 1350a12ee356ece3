//! clone command - Clone a repository into a new directory

use crate::cli::context::Context;
use crate::git::Git;
use anyhow::Result;
use std::path::Path;

/// Clone `url` into `directory` (non-bare).
///
/// A relative `directory` is taken relative to the working directory, so
/// `--cwd` applies. Prints nothing on success.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `url` - Repository URL or local path
/// * `directory` - Destination; must not exist or be empty
pub fn clone(ctx: &Context, url: &str, directory: &Path) -> Result<()> {
    let dest = ctx.resolve_path(directory)?;
    ctx.debug(format!("cloning {} into {}", url, dest.display()));

    let git = Git::clone(url, &dest)?;

    ctx.debug(format!("cloned into {}", git.work_dir()?.display()));
    Ok(())
}
