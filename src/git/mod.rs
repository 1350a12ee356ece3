//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module should import
//! `git2`. Everything gitmini does (clone, open, resolve, checkout, list
//! local refs, list remote refs) is a thin call through [`Git`].
//!
//! # Invariants
//!
//! - No other module calls git2 directly
//! - All operations return strong types (Oid, RefName)
//! - A handle serves one operation and is dropped when the command returns
//!
//! # Example
//!
//! ```ignore
//! use gitmini::core::types::RefKind;
//! use gitmini::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for entry in git.list_refs(RefKind::Tags)? {
//!     println!("{}", entry.short_name());
//! }
//! ```

mod interface;

pub use interface::{CheckoutMode, Git, GitError, RefEntry};
