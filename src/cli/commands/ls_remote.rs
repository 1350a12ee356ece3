//! ls-remote command - List a remote's branches or tags

use super::parse_ref_kind;
use crate::cli::context::Context;
use crate::git::{Git, RefEntry};
use crate::ui::output;
use anyhow::Result;

/// Print `<oid> <full-name>` for each remote ref of the requested type.
///
/// The keyword is checked before the remote is contacted.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `ref_type` - Ref-type keyword (`branches`, `--tags`, ...)
/// * `url` - Remote URL or local path
pub fn ls_remote(ctx: &Context, ref_type: &str, url: &str) -> Result<()> {
    let kind = parse_ref_kind(ref_type)?;
    ctx.debug(format!("listing {} refs of {}", kind, url));

    let entries = Git::list_remote_refs(url, kind)?;
    ctx.debug(format!("remote advertised {} matching refs", entries.len()));

    for line in remote_ref_lines(&entries) {
        output::print(line)?;
    }
    Ok(())
}

/// Format remote refs in output order.
pub fn remote_ref_lines(entries: &[RefEntry]) -> Vec<String> {
    entries.iter().map(ToString::to_string).collect()
}
