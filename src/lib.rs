//! git-ls - a directory listing annotated with git information.
//!
//! For every entry of a directory the report shows its git status, a small
//! added/removed diff graph, and the date, author and subject of the last
//! commit that touched it. Names and subjects are OSC8 hyperlinks, and `#123`
//! references in subjects link to the GitHub pull request when the repository
//! has a GitHub remote.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Repository and directory collaborators
//! - Status, diffstat and commit aggregation
//! - Width-aware table rendering
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Rendering
    diff_graph,
    github_base_url,
    hyperlink,
    linkify,
    // Aggregation
    parse_commit,
    parse_commit_record,
    parse_diff_stat,
    parse_status,
    printable_width,
    read_entries,
    render,

    CommitInfo,
    DiffTotals,
    // Entry model
    Entry,
    // Error handling
    GitLsError,
    // Collaborators
    GitRepo,
    // Settings
    LsConfig,
    RenderContext,
    Result,
    Style,
};
