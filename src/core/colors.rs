//! Style table for the report's ANSI colors.
//!
//! Every colored fragment of the report goes through [`Style`], so the exact
//! escape bytes live in one place and the width model can rely on them being
//! plain SGR sequences.
//!
//! # Color Scheme
//! - **Directories**: Blue names
//! - **Executables**: Green names
//! - **Diff graph**: Green `+` run, red `-` run
//! - **Authors**: Yellow
//! - **Issue references**: Blue
//! - **Branch header**: Red branch name

/// Resets every SGR attribute
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Directory,
    Executable,
    Added,
    Removed,
    Author,
    IssueRef,
    Branch,
}

impl Style {
    /// Opening escape sequence for this style
    pub fn escape(self) -> &'static str {
        match self {
            Style::Directory | Style::IssueRef => "\x1b[34m",
            Style::Executable | Style::Added => "\x1b[32m",
            Style::Removed | Style::Branch => "\x1b[31m",
            Style::Author => "\x1b[33m",
        }
    }

    /// Wrap `text` in this style, reset included
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, RESET)
    }

    /// Style for an entry name, if any. Directories win over the executable bit.
    pub fn for_entry(is_dir: bool, is_executable: bool) -> Option<Style> {
        if is_dir {
            Some(Style::Directory)
        } else if is_executable {
            Some(Style::Executable)
        } else {
            None
        }
    }
}
