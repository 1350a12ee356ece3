//! Shared fixtures for integration tests.
//!
//! Repositories are built with the `git` CLI so the code under test never
//! sets up its own preconditions.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use gitmini::cli::Context;
use gitmini::core::config::Config;
use gitmini::git::Git;

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit on main.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);
        run_git(dir.path(), &["config", "tag.gpgSign", "false"]);
        run_git(dir.path(), &["config", "commit.gpgSign", "false"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path as a string, for use as a clone/ls-remote URL.
    pub fn url(&self) -> String {
        self.path().to_str().expect("temp path is UTF-8").to_string()
    }

    /// Open a Git interface to this repository.
    pub fn git(&self) -> Git {
        Git::open(self.path()).expect("failed to open test repo")
    }

    /// Context rooted at this repository.
    pub fn context(&self) -> Context {
        Context::new(Some(self.path().to_path_buf()), false, Config::default())
    }

    /// Write a file and commit it, returning the new HEAD OID.
    pub fn commit(&self, filename: &str, content: &str, message: &str) -> String {
        std::fs::write(self.path().join(filename), content).unwrap();
        run_git(self.path(), &["add", filename]);
        run_git(self.path(), &["commit", "-m", message]);
        self.rev_parse("HEAD")
    }

    /// Create a branch at the current HEAD.
    pub fn branch(&self, name: &str) {
        run_git(self.path(), &["branch", name]);
    }

    /// Create a lightweight tag at `rev`.
    pub fn tag_at(&self, name: &str, rev: &str) {
        run_git(self.path(), &["tag", name, rev]);
    }

    /// Create an annotated tag at the current HEAD.
    pub fn annotated_tag(&self, name: &str, message: &str) {
        run_git(self.path(), &["tag", "-a", name, "-m", message]);
    }

    /// Switch branches with the git CLI.
    pub fn switch(&self, name: &str) {
        run_git(self.path(), &["checkout", "-q", name]);
    }

    /// Resolve a revision to a commit OID with the git CLI.
    pub fn rev_parse(&self, rev: &str) -> String {
        git_stdout(self.path(), &["rev-parse", &format!("{}^{{commit}}", rev)])
    }

    /// Full symbolic name of HEAD, or `None` when detached.
    pub fn head_symbolic(&self) -> Option<String> {
        let output = Command::new("git")
            .args(["symbolic-ref", "-q", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git symbolic-ref failed");
        if output.status.success() {
            Some(String::from_utf8(output.stdout).unwrap().trim().to_string())
        } else {
            None
        }
    }

    /// Read a file from the worktree.
    pub fn read(&self, filename: &str) -> String {
        std::fs::read_to_string(self.path().join(filename)).unwrap()
    }

    /// Overwrite a file in the worktree without committing.
    pub fn write(&self, filename: &str, content: &str) {
        std::fs::write(self.path().join(filename), content).unwrap();
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Run a git command and return its trimmed stdout.
pub fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}
