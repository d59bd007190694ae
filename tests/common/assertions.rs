//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-ls report lines, error messages,
//! and expected behaviors.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the error prefix
pub fn is_error() -> impl Predicate<str> {
    predicates::str::contains("✕ Error:")
}

/// Creates a predicate that checks for the branch header
pub fn on_branch(branch: &str) -> impl Predicate<str> {
    predicates::str::starts_with(format!("On branch \x1b[31m{branch}\x1b[0m\n\n"))
}

/// Creates a predicate that checks a name is wrapped in a file hyperlink
pub fn has_file_link(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("/{name}\x1b\\"))
}

/// Creates a predicate for a pull request link in a commit subject
pub fn has_pull_link(base_url: &str, number: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("\x1b]8;;{base_url}/pull/{number}\x1b\\"))
}

/// The report line for `name`, with escape sequences left in place
pub fn line_for<'a>(stdout: &'a str, name: &str) -> Option<&'a str> {
    let link_end = format!("/{name}\x1b\\");
    stdout.lines().find(|line| line.contains(&link_end))
}
