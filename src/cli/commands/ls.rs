//! ls command - List local branch or tag names (alias: for-each-ref)

use super::parse_ref_kind;
use crate::cli::context::Context;
use crate::git::{Git, RefEntry};
use crate::ui::output;
use anyhow::Result;

/// Print the short name of each local ref of the requested type.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `ref_type` - Ref-type keyword (`branches`, `refs/tags`, ...)
pub fn ls(ctx: &Context, ref_type: &str) -> Result<()> {
    let kind = parse_ref_kind(ref_type)?;

    let cwd = ctx.work_dir()?;
    ctx.debug(format!("opening repository at {}", cwd.display()));
    let git = Git::open(&cwd)?;

    let entries = git.list_refs(kind)?;
    ctx.debug(format!("found {} {} refs", entries.len(), kind));

    for name in local_ref_names(&entries) {
        output::print(name)?;
    }
    Ok(())
}

/// Short names in output order.
pub fn local_ref_names(entries: &[RefEntry]) -> Vec<&str> {
    entries.iter().map(RefEntry::short_name).collect()
}
