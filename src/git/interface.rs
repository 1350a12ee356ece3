//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to all Git operations in
//! gitmini. Every command reaches libgit2 through the [`Git`] struct (or its
//! associated functions for operations that have no local repository, such
//! as cloning and listing a remote). Errors are normalized into typed
//! failure categories.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::RefNotFound`]: Requested ref does not exist
//! - [`GitError::CloneFailed`]: Clone could not complete
//! - [`GitError::RemoteFailed`]: Remote could not be contacted or listed
//! - [`GitError::CheckoutFailed`]: Worktree could not be updated
//!
//! # Example
//!
//! ```ignore
//! use gitmini::core::types::{RefKind, RefName};
//! use gitmini::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let entry = git.resolve_reference(&RefName::within(RefKind::Branches, "main")?)?;
//! println!("main is at {}", entry.oid);
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::types::{Oid, RefKind, RefName, TypeError};

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Requested ref does not exist.
    #[error("reference not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Clone failed (unreachable URL, non-empty destination, transport error).
    #[error("clone of {url} failed: {message}")]
    CloneFailed {
        /// The URL being cloned
        url: String,
        /// The error message
        message: String,
    },

    /// Remote could not be connected to or listed.
    #[error("remote {url}: {message}")]
    RemoteFailed {
        /// The remote URL
        url: String,
        /// The error message
        message: String,
    },

    /// Worktree checkout failed (conflicting local changes, I/O errors).
    #[error("checkout of {refname} failed: {message}")]
    CheckoutFailed {
        /// The ref being checked out
        refname: String,
        /// The error message
        message: String,
    },

    /// Invalid object id format.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// The invalid OID string
        oid: String,
    },

    /// Invalid ref name format.
    #[error("invalid ref name: {message}")]
    InvalidRefName {
        /// Description of the problem
        message: String,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with richer context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound => GitError::RefNotFound {
                refname: context.to_string(),
            },
            git2::ErrorCode::InvalidSpec => GitError::InvalidRefName {
                message: format!("{}: {}", context, err.message()),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidOid(msg) => GitError::InvalidOid { oid: msg },
            TypeError::InvalidRefName(msg) => GitError::InvalidRefName { message: msg },
        }
    }
}

/// A ref with its name and target OID.
///
/// Displays as `<oid> <full-name>`, the same shape `git ls-remote` prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefEntry {
    /// The full ref name
    pub name: RefName,
    /// The OID the ref points to
    pub oid: Oid,
}

impl RefEntry {
    /// The ref name without its `refs/heads/` or `refs/tags/` prefix.
    pub fn short_name(&self) -> &str {
        self.name.short_name()
    }
}

impl std::fmt::Display for RefEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.oid, self.name)
    }
}

/// How checkout treats local modifications in the worktree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutMode {
    /// Refuse to overwrite modified files.
    #[default]
    Safe,
    /// Overwrite modified files to match the target.
    Force,
}

impl CheckoutMode {
    /// Select the mode from a `force` flag.
    pub fn from_force(force: bool) -> Self {
        if force {
            CheckoutMode::Force
        } else {
            CheckoutMode::Safe
        }
    }
}

/// The Git interface.
///
/// This is the **single point of interaction** with Git. No other module
/// imports `git2` directly.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Cloning
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Clone `url` into `dest` as a regular (non-bare) repository.
    ///
    /// libgit2 refuses destinations that exist and are not empty, and removes
    /// what it created when the clone fails part-way.
    ///
    /// # Errors
    ///
    /// - [`GitError::CloneFailed`] for any transport, protocol or filesystem failure
    pub fn clone(url: &str, dest: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::clone(url, dest).map_err(|e| GitError::CloneFailed {
            url: url.to_string(),
            message: e.message().to_string(),
        })?;

        Ok(Self { repo })
    }

    /// Path to the working directory.
    pub fn work_dir(&self) -> Result<&Path, GitError> {
        self.repo.workdir().ok_or(GitError::BareRepo)
    }

    // =========================================================================
    // Ref Resolution
    // =========================================================================

    /// Resolve a ref that must exist, following symbolic refs.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if the ref (or its symbolic target) doesn't exist
    pub fn resolve_reference(&self, name: &RefName) -> Result<RefEntry, GitError> {
        let resolved = self
            .repo
            .find_reference(name.as_str())
            .and_then(|reference| reference.resolve())
            .map_err(|e| GitError::from_git2(e, name.as_str()))?;

        let target = resolved.target().ok_or_else(|| GitError::RefNotFound {
            refname: name.to_string(),
        })?;

        Ok(RefEntry {
            name: name.clone(),
            oid: Oid::new(target.to_string())?,
        })
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Check out the worktree at `name`.
    ///
    /// Branch refs attach HEAD to the branch. Any other ref (tags) detaches
    /// HEAD at the commit the ref peels to. The worktree is written before
    /// HEAD moves, so a refused checkout leaves HEAD untouched.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if the ref doesn't exist
    /// - [`GitError::CheckoutFailed`] if the worktree cannot be updated
    pub fn checkout(&self, name: &RefName, mode: CheckoutMode) -> Result<(), GitError> {
        let commit = self
            .repo
            .find_reference(name.as_str())
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| GitError::from_git2(e, name.as_str()))?;

        let checkout_failed = |e: git2::Error| GitError::CheckoutFailed {
            refname: name.to_string(),
            message: e.message().to_string(),
        };

        let mut builder = git2::build::CheckoutBuilder::new();
        match mode {
            CheckoutMode::Safe => builder.safe(),
            CheckoutMode::Force => builder.force(),
        };

        self.repo
            .checkout_tree(commit.as_object(), Some(&mut builder))
            .map_err(checkout_failed)?;

        if name.is_branch_ref() {
            self.repo.set_head(name.as_str()).map_err(checkout_failed)?;
        } else {
            self.repo
                .set_head_detached(commit.id())
                .map_err(checkout_failed)?;
        }

        Ok(())
    }

    // =========================================================================
    // Ref Enumeration
    // =========================================================================

    /// List the refs of one kind in the order libgit2 yields them.
    ///
    /// Each entry carries the ref's direct target; for annotated tags this
    /// is the tag object, not the commit.
    pub fn list_refs(&self, kind: RefKind) -> Result<Vec<RefEntry>, GitError> {
        let pattern = format!("{}*", kind.prefix());
        let refs = self
            .repo
            .references_glob(&pattern)
            .map_err(|e| GitError::Internal {
                message: e.message().to_string(),
            })?;

        let mut entries = Vec::new();
        for reference in refs {
            let reference = reference.map_err(|e| GitError::Internal {
                message: e.message().to_string(),
            })?;

            // Skip refs with non-UTF8 names
            let Some(name) = reference.name() else {
                continue;
            };

            let Ok(ref_name) = RefName::new(name) else {
                continue;
            };

            // Dangling symbolic refs have nothing to show
            let Some(oid) = reference.resolve().ok().and_then(|r| r.target()) else {
                continue;
            };

            entries.push(RefEntry {
                name: ref_name,
                oid: Oid::new(oid.to_string())?,
            });
        }

        Ok(entries)
    }

    /// List the refs of one kind advertised by the remote at `url`.
    ///
    /// Uses a detached remote, so nothing is written to disk. Entries keep
    /// the remote's advertisement order; peeled tag entries (`<tag>^{}`) are
    /// dropped.
    ///
    /// # Errors
    ///
    /// - [`GitError::RemoteFailed`] if the remote cannot be reached or listed
    pub fn list_remote_refs(url: &str, kind: RefKind) -> Result<Vec<RefEntry>, GitError> {
        let remote_failed = |e: git2::Error| GitError::RemoteFailed {
            url: url.to_string(),
            message: e.message().to_string(),
        };

        let mut remote = git2::Remote::create_detached(url).map_err(remote_failed)?;
        remote
            .connect(git2::Direction::Fetch)
            .map_err(remote_failed)?;

        let mut entries = Vec::new();
        for head in remote.list().map_err(remote_failed)? {
            if !head.name().starts_with(kind.prefix()) {
                continue;
            }

            let Ok(ref_name) = RefName::new(head.name()) else {
                continue;
            };

            entries.push(RefEntry {
                name: ref_name,
                oid: Oid::new(head.oid().to_string())?,
            });
        }

        Ok(entries)
    }
}
