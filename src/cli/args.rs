//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Grammar
//!
//! ```text
//! gitmini [--cwd <path>] [--debug] [<command> [args...]]
//!
//! gitmini                          # same as `gitmini version`
//! gitmini version
//! gitmini clone <url> <directory>
//! gitmini checkout <ref-name>
//! gitmini ls-remote <ref-type> <url>
//! gitmini ls <ref-type>            # alias: for-each-ref
//! ```
//!
//! Ref types are taken as plain strings and matched against the keyword
//! table on [`crate::core::types::RefKind`], so an unknown keyword is
//! reported by gitmini itself rather than by clap. Unknown subcommands are
//! captured the same way.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// gitmini - clone, check out, and list refs through libgit2
#[derive(Parser, Debug)]
#[command(name = "gitmini")]
#[command(author, version, about, long_about = None)]
#[command(allow_external_subcommands = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Run as if gitmini was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse an explicit argument vector (first element is the program name).
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// The subcommand to run; `version` when none was given.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Version)
    }
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the gitmini version
    Version,

    /// Clone a repository into a new directory
    #[command(after_help = "\
EXAMPLES:
    gitmini clone https://github.com/rust-lang/log.git log
    gitmini clone ../upstream work")]
    Clone {
        /// Repository to clone (URL or local path)
        url: String,

        /// Destination; must not exist or be empty
        directory: PathBuf,
    },

    /// Check out a branch, falling back to a tag of the same name
    #[command(long_about = "Check out a branch, falling back to a tag of the same name.\n\n\
        refs/heads/<ref-name> is tried first; only if it does not exist is \
        refs/tags/<ref-name> tried. A branch checkout attaches HEAD to the \
        branch, a tag checkout detaches HEAD at the tagged commit.\n\n\
        The repository is found by searching upward from the working \
        directory (or --cwd), so this works from any subdirectory.")]
    Checkout {
        /// Short branch or tag name
        ref_name: String,
    },

    /// List a remote's branches or tags without cloning to disk
    #[command(name = "ls-remote")]
    LsRemote {
        /// branches | heads | --heads | refs/heads | tags | --tags | refs/tags
        #[arg(allow_hyphen_values = true)]
        ref_type: String,

        /// Remote URL or local path
        url: String,
    },

    /// List local branch or tag names
    #[command(
        name = "ls",
        visible_alias = "for-each-ref",
        long_about = "List local branch or tag names, one short name per line.\n\n\
            The repository is found by searching upward from the working \
            directory (or --cwd), so this works from any subdirectory."
    )]
    Ls {
        /// branches | heads | --heads | refs/heads | tags | --tags | refs/tags
        #[arg(allow_hyphen_values = true)]
        ref_type: String,
    },

    /// Anything else; reported as an unknown command
    #[command(external_subcommand)]
    External(Vec<String>),
}
