//! Git repository management and setup utilities
//!
//! Provides functions for creating throw-away repositories in various states
//! and for running the `git-ls` binary against them.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use git_ls::core::error::{GitLsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    /// Stands in for the user's home so config stays inside the test
    pub home: TempDir,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.path().join("config")
    }

    /// `git-ls` command running in the repository root with an isolated
    /// config directory
    pub fn git_ls(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("git-ls")
            .map_err(|e| GitLsError::Io(std::io::Error::other(e)))?;
        cmd.current_dir(&self.path)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config_dir());
        Ok(cmd)
    }
}

/// Runs `git <args>` in `dir`, failing the helper if git cannot be started
pub fn git(dir: &Path, args: &[&str]) -> Result<()> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(GitLsError::Io)?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository on
/// branch `main`, and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let home = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"])?;
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
        home,
    })
}

/// Sets up a git repository with an initial commit of "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content, creating parent directories
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Adds a file to the git index ("." for everything)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "-m", message])
}

pub fn add_remote(repo_path: &Path, name: &str, url: &str) -> Result<()> {
    git(repo_path, &["remote", "add", name, url])
}

#[cfg(unix)]
pub fn make_executable(repo_path: &Path, filename: &str) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = repo_path.join(filename);
    let mut permissions = fs::metadata(&path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)?;
    Ok(())
}

/// Writes `config.json` into the repo's isolated config directory
pub fn write_config(repo: &TestRepo, json: &str) -> Result<()> {
    let dir = repo.config_dir().join("git-ls");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("config.json"), json)?;
    Ok(())
}
