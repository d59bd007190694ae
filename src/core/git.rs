//! Read-only access to the repository the listed directory belongs to.
//!
//! This module provides [`GitRepo`], which discovers the repository with `git2`
//! and shells out to the `git` binary for the text the report is built from.
//! Nothing here writes to the repository.
//!
//! # Public API
//! - [`GitRepo`]: Main interface for repository queries
//!
//! # Key Features
//! - **Repository info**: Work tree root and current branch via git2
//! - **Raw git output**: Porcelain status, numstat diff, per-file last commit and
//!   remotes, returned as text for the aggregators to parse
//! - **Fail fast**: A git subcommand that cannot run or exits non-zero is an error

use crate::core::{
    commit::{DATE_FORMAT, LOG_FORMAT},
    error::{GitLsError, Result},
};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    /// Run `git <args>` in `dir` and return its stdout
    fn run_git(&self, dir: &Path, args: &[&str]) -> Result<String> {
        let command_line = format!("git {}", args.join(" "));
        log::debug!("running `{command_line}` in {}", dir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| GitLsError::git_command_spawn(&command_line, e))?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            return Err(GitLsError::git_command_failed(
                command_line,
                error_msg.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(GitLsError::NoWorkdir)
    }

    pub fn get_repo_path(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    /// `dir` relative to the work tree root, `/`-separated, `""` for the root
    pub fn relative_dir(&self, dir: &Path) -> Result<String> {
        let root = self.workdir()?.canonicalize()?;
        let dir = dir.canonicalize()?;
        let rel = dir
            .strip_prefix(&root)
            .map_err(|_| GitLsError::outside_work_tree(&dir))?;

        let components: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(components.join("/"))
    }

    pub fn get_current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        match (head.shorthand(), head.target()) {
            (Some(branch_name), _) if head.is_branch() => Ok(branch_name.to_string()),
            (_, Some(oid)) => Ok(format!("detached at {}", &oid.to_string()[..7])),
            _ => Ok("-none-".to_string()),
        }
    }

    /// `git status --porcelain --ignored`; paths are relative to the work tree root
    pub fn status_porcelain(&self) -> Result<String> {
        let workdir = self.workdir()?;
        self.run_git(workdir, &["status", "--porcelain", "--ignored"])
    }

    /// `git diff --numstat --relative HEAD` for the changes below `dir`
    pub fn diff_numstat(&self, dir: &Path) -> Result<String> {
        self.run_git(dir, &["diff", "--numstat", "--relative", "HEAD"])
    }

    /// NUL-separated last-commit record for `name` inside `dir`, empty when the
    /// path has no history
    pub fn last_commit(&self, dir: &Path, name: &str) -> Result<String> {
        self.run_git(dir, &["log", "-1", DATE_FORMAT, LOG_FORMAT, "--", name])
    }

    /// `git remote -v`
    pub fn remotes(&self) -> Result<String> {
        let workdir = self.workdir()?;
        self.run_git(workdir, &["remote", "-v"])
    }
}
