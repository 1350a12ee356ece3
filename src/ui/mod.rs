//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All output goes through this module so the stdout/stderr split and the
//! `error:` line format stay consistent across commands.

pub mod output;
