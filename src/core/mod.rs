//! Core functionality for git-ls.
//!
//! This module provides the building blocks of the report: the collaborators
//! that read the directory and the repository, the aggregators that fold git
//! output into entries, and the renderer that lays the entries out.

pub mod colors;
pub mod commit;
pub mod config;
pub mod diff_graph;
pub mod diffstat;
pub mod dirs;
pub mod error;
pub mod git;
pub mod git_status;
pub mod hyperlink;
pub mod listing;
pub mod output;
pub mod state;
pub mod table;
pub mod terminal;
pub mod width;

// === Error handling ===
pub use error::{GitLsError, Result};

// === Collaborators ===
// Repository access, directory enumeration and terminal size
pub use git::GitRepo;
pub use listing::read_entries;
pub use terminal::stdout_columns;

// === Entry model ===
pub use commit::CommitInfo;
pub use diffstat::DiffTotals;
pub use state::Entry;

// === Aggregation ===
// Fold raw git output into the entries of the listed directory
pub use commit::{parse_commit, parse_commit_record};
pub use diffstat::parse_diff_stat;
pub use git_status::parse_status;

// === Rendering ===
pub use colors::Style;
pub use diff_graph::diff_graph;
pub use hyperlink::{github_base_url, hyperlink, linkify};
pub use table::{render, RenderContext};
pub use width::printable_width;

// === Settings ===
pub use config::LsConfig;

// === Output formatting ===
pub use output::{print_error, usage_text};
