//! version command - Print the gitmini version

use crate::ui::output;
use anyhow::Result;

/// The identification line printed by `version`.
pub fn version_string() -> String {
    format!("gitmini version {}", env!("CARGO_PKG_VERSION"))
}

/// Print the version. Never fails.
pub fn version() -> Result<()> {
    output::print(version_string())?;
    Ok(())
}
