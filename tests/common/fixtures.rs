//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! to test the report consistently.

#![allow(dead_code)]

use super::repository::*;
use git_ls::core::error::Result;

/// Scenario: a committed tree with one modified, one untracked and one
/// ignored file, plus a committed subdirectory
///
/// ```text
/// .gitignore     committed
/// README.md      committed, modified (2 added, 1 removed)
/// notes.txt      untracked
/// build.log      ignored
/// src/lib.rs     committed
/// src/main.rs    committed, then modified
/// ```
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, ".gitignore", "*.log\n")?;
    create_file(&repo.path, "README.md", "# Title\nold line\n")?;
    create_file(&repo.path, "src/lib.rs", "pub fn lib() {}\n")?;
    create_file(&repo.path, "src/main.rs", "fn main() {}\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "README.md", "# Title\nnew line\nanother line\n")?;
    create_file(&repo.path, "src/main.rs", "fn main() {\n    println!(\"hi\");\n}\n")?;
    create_file(&repo.path, "notes.txt", "todo\n")?;
    create_file(&repo.path, "build.log", "log\n")?;

    Ok(repo)
}
