//! core::config::schema
//!
//! Configuration schema types.
//!
//! Every field is optional so a partial file only overrides what it names;
//! defaults are applied by the accessors on [`super::Config`].

use serde::{Deserialize, Serialize};

/// Contents of `config.toml`.
///
/// # Example
///
/// ```toml
/// debug = false
///
/// [checkout]
/// force = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Emit `[debug]` diagnostics on stderr
    pub debug: Option<bool>,

    /// Checkout defaults
    pub checkout: Option<CheckoutDefaults>,
}

/// Defaults for `checkout`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CheckoutDefaults {
    /// Overwrite local modifications instead of refusing
    pub force: Option<bool>,
}
