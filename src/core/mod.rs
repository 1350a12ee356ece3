//! core
//!
//! Core domain types and configuration for gitmini.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RefName, Oid, RefKind
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Nothing here touches a repository; that is the job of [`crate::git`]

pub mod config;
pub mod types;
