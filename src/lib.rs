//! gitmini - a minimal git front end
//!
//! gitmini exposes `clone`, `checkout`, `ls-remote`, `ls` (alias
//! `for-each-ref`) and `version`. Each command parses its arguments and
//! forwards them to libgit2; object storage, transport and worktree
//! materialization all live in the library.
//!
//! # Architecture
//!
//! - [`cli`] - Argument grammar, context, dispatch, exit status
//! - [`core`] - Domain types and configuration
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Output formatting
//!
//! # Invariants
//!
//! 1. One process runs exactly one command against at most one repository
//! 2. Branch names always win over tag names when checking out
//! 3. Failures print one line and exit with status 1; nothing is retried

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
