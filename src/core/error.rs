//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`GitLsError`] which covers every way a report can fail.
//! It uses `thiserror` for ergonomic error definitions and includes constructors
//! for the failure scenarios that carry context.
//!
//! # Public API
//! - [`GitLsError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, GitLsError>`
//!
//! # Error Categories
//! - **Repository**: Not a repository, bare repository, git2 library errors
//! - **Directory**: Unreadable report directory, path outside the work tree
//! - **git subcommands**: Spawn failures, non-zero exits, unexpected log format
//! - **Config**: File system and parse errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-ls
#[derive(Error, Debug)]
pub enum GitLsError {
    // Git repository errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Repository has no working directory")]
    NoWorkdir,

    // Directory errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Directory {path} is outside the repository work tree")]
    OutsideWorkTree { path: PathBuf },

    // git subcommand errors
    #[error("Failed to run `{command}`: {source}")]
    GitCommandSpawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed: {message}")]
    GitCommandFailed { command: String, message: String },

    #[error("Unexpected git log output format: {record:?}")]
    UnexpectedLogFormat { record: String },

    // Config errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using GitLsError
pub type Result<T> = std::result::Result<T, GitLsError>;

impl GitLsError {
    /// Create a directory read error
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    pub fn outside_work_tree(path: impl Into<PathBuf>) -> Self {
        Self::OutsideWorkTree { path: path.into() }
    }

    /// Create an error for a git subcommand that could not be started
    pub fn git_command_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::GitCommandSpawn {
            command: command.into(),
            source,
        }
    }

    /// Create an error for a git subcommand that exited unsuccessfully
    pub fn git_command_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GitCommandFailed {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn unexpected_log_format(record: impl Into<String>) -> Self {
        Self::UnexpectedLogFormat {
            record: record.into(),
        }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }
}
