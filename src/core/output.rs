//! Text printed around the report: the error line and the usage page.
//!
//! # Design Principles
//! - **Errors on stderr**: stdout only ever carries a complete report
//! - **Consistent color scheme**: Red error prefix, white message

use crate::core::hyperlink::hyperlink;
use colored::*;

const PROJECT_URL: &str = env!("CARGO_PKG_REPOSITORY");

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
/// ✕ Error: <message>
/// ```
///
/// # Colors
/// - "✕ Error:" in red
/// - Message in white
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✕ Error:".red(), message.white());
}

/// Man-page style usage text printed for `-h` / `--help`
pub fn usage_text() -> String {
    format!(
        "GIT-LS(1)

NAME
    git-ls - show a directory annotated with links and git info

SYNOPSIS
    git ls [<options>] [<dir>]

DESCRIPTION
    Displays the files in a directory (the current one by default), their git status, a short diffstat, the date and author of their last commit and as much of its subject as fits the terminal.

    Every file is an OSC8 hyperlink, so it can be opened by clicking on it in a terminal that supports them. If the repository has a GitHub remote, commit subjects link to the commit and #123 references link to the pull request.

OPTIONS
    --version
        Print the version number and exit

    -h, --help
        Print this message and exit

    --diffWidth=n
        Print the diffstat graph with the given width. Default is 4

    --debug
        Log what git-ls is doing to standard error

{}
",
        hyperlink(PROJECT_URL, PROJECT_URL)
    )
}
