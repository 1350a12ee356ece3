//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RefName`] - Validated Git reference name
//! - [`Oid`] - Git object identifier (SHA)
//! - [`RefKind`] - Reference namespace (branches or tags)
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use gitmini::core::types::{Oid, RefKind, RefName};
//!
//! // Valid constructions
//! let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
//! let refname = RefName::within(RefKind::Tags, "v1.0").unwrap();
//! assert_eq!(refname.as_str(), "refs/tags/v1.0");
//!
//! // Invalid constructions fail at creation time
//! assert!(RefName::new("refs/heads/invalid..name").is_err());
//! assert!(Oid::new("not-a-sha").is_err());
//! ```

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid object id: {0}")]
    InvalidOid(String),

    #[error("invalid ref name: {0}")]
    InvalidRefName(String),
}

/// A reference namespace that can be enumerated.
///
/// Each kind owns its `refs/...` prefix and the keyword spellings accepted
/// on the command line. Both historical spellings (`--heads`/`--tags` and
/// `refs/heads`/`refs/tags`) are accepted alongside the plain words.
///
/// # Example
///
/// ```
/// use gitmini::core::types::RefKind;
///
/// assert_eq!(RefKind::from_keyword("--heads"), Some(RefKind::Branches));
/// assert_eq!(RefKind::from_keyword("refs/tags"), Some(RefKind::Tags));
/// assert_eq!(RefKind::from_keyword("remotes"), None);
/// assert_eq!(RefKind::Branches.prefix(), "refs/heads/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefKind {
    /// Local branches under `refs/heads/`.
    Branches,
    /// Tags under `refs/tags/`.
    Tags,
}

impl RefKind {
    /// All kinds, in resolution priority order (branches win over tags).
    pub const ALL: [RefKind; 2] = [RefKind::Branches, RefKind::Tags];

    const BRANCH_KEYWORDS: &'static [&'static str] = &["branches", "heads", "--heads", "refs/heads"];
    const TAG_KEYWORDS: &'static [&'static str] = &["tags", "--tags", "refs/tags"];

    /// Parse a command-line ref-type keyword.
    ///
    /// Returns `None` for anything outside the keyword table.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keywords().contains(&keyword))
    }

    /// The keyword spellings accepted for this kind.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RefKind::Branches => Self::BRANCH_KEYWORDS,
            RefKind::Tags => Self::TAG_KEYWORDS,
        }
    }

    /// The namespace prefix, including the trailing slash.
    pub fn prefix(&self) -> &'static str {
        match self {
            RefKind::Branches => "refs/heads/",
            RefKind::Tags => "refs/tags/",
        }
    }

    /// Get a human-readable description of the kind.
    pub fn description(&self) -> &'static str {
        match self {
            RefKind::Branches => "branch",
            RefKind::Tags => "tag",
        }
    }
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A Git object identifier (SHA-1 or SHA-256).
///
/// # Example
///
/// ```
/// use gitmini::core::types::Oid;
///
/// // Create from hex string (normalized to lowercase)
/// let oid = Oid::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
/// assert_eq!(oid.as_str(), "abc123def4567890abc123def4567890abc12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid(String);

impl Oid {
    /// Create a new validated object id.
    ///
    /// The OID is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOid` if the string is not a valid hex OID.
    pub fn new(oid: impl Into<String>) -> Result<Self, TypeError> {
        let oid = oid.into().to_ascii_lowercase();
        Self::validate(&oid)?;
        Ok(Self(oid))
    }

    fn validate(oid: &str) -> Result<(), TypeError> {
        // SHA-1 is 40 hex chars, SHA-256 is 64
        if oid.len() != 40 && oid.len() != 64 {
            return Err(TypeError::InvalidOid(format!(
                "expected 40 or 64 hex characters, got {}",
                oid.len()
            )));
        }
        if !oid.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidOid(
                "object id must be hexadecimal".into(),
            ));
        }
        Ok(())
    }

    /// Get the object id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated Git reference name.
///
/// Reference names must conform to Git's refname rules (see `git check-ref-format`).
///
/// # Example
///
/// ```
/// use gitmini::core::types::{RefKind, RefName};
///
/// let refname = RefName::within(RefKind::Branches, "feature/foo").unwrap();
/// assert_eq!(refname.as_str(), "refs/heads/feature/foo");
/// assert_eq!(refname.short_name(), "feature/foo");
/// assert_eq!(refname.kind(), Some(RefKind::Branches));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefName(String);

impl RefName {
    /// Create a new validated ref name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRefName` if the name violates Git's refname rules.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Build the full ref name for `short` inside the namespace of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRefName` if the resulting name is invalid
    /// (for example when `short` is empty or contains `..`).
    pub fn within(kind: RefKind, short: &str) -> Result<Self, TypeError> {
        if short.is_empty() {
            return Err(TypeError::InvalidRefName(format!(
                "{} name cannot be empty",
                kind.description()
            )));
        }
        Self::new(format!("{}{}", kind.prefix(), short))
    }

    /// The namespace this ref lives in, if it is a branch or tag.
    pub fn kind(&self) -> Option<RefKind> {
        RefKind::ALL
            .into_iter()
            .find(|kind| self.0.starts_with(kind.prefix()))
    }

    /// The name with its `refs/heads/` or `refs/tags/` prefix removed.
    ///
    /// Refs outside both namespaces are returned unchanged.
    pub fn short_name(&self) -> &str {
        match self.kind() {
            Some(kind) => &self.0[kind.prefix().len()..],
            None => &self.0,
        }
    }

    /// Check if this ref is a branch ref.
    pub fn is_branch_ref(&self) -> bool {
        self.kind() == Some(RefKind::Branches)
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRefName("ref name cannot be empty".into()));
        }

        if name.starts_with('/') {
            return Err(TypeError::InvalidRefName(
                "ref name cannot start with '/'".into(),
            ));
        }

        if name.ends_with('/') {
            return Err(TypeError::InvalidRefName(
                "ref name cannot end with '/'".into(),
            ));
        }
        if name.ends_with(".lock") {
            return Err(TypeError::InvalidRefName(
                "ref name cannot end with '.lock'".into(),
            ));
        }

        for seq in ["..", "@{", "//"] {
            if name.contains(seq) {
                return Err(TypeError::InvalidRefName(format!(
                    "ref name cannot contain '{seq}'"
                )));
            }
        }

        const INVALID_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];
        for c in INVALID_CHARS {
            if name.contains(c) {
                return Err(TypeError::InvalidRefName(format!(
                    "ref name cannot contain '{c}'"
                )));
            }
        }

        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(TypeError::InvalidRefName(
                "ref name cannot contain control characters".into(),
            ));
        }

        for component in name.split('/') {
            if component.starts_with('.') {
                return Err(TypeError::InvalidRefName(
                    "path component cannot start with '.'".into(),
                ));
            }
            if component.ends_with(".lock") {
                return Err(TypeError::InvalidRefName(
                    "path component cannot end with '.lock'".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the ref name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
