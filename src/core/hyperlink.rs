//! OSC8 terminal hyperlinks and GitHub link generation.
//!
//! # Public API
//! - [`hyperlink`]: Wrap text in an OSC8 hyperlink
//! - [`linkify`]: Turn a commit subject into commit links with `#123` issue links
//! - [`github_base_url`]: Derive the GitHub web URL from `git remote -v` output
//! - [`file_url`]: `file://` URL for a path on this machine

use crate::core::colors::Style;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// `#` followed by ASCII digits only
static ISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9]+)").expect("valid regex"));

static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com[:/]([\w-]+)/([\w-]+)").expect("valid regex"));

/// Wrap `text` in an OSC8 hyperlink to `url`.
///
/// Format: `ESC ]8;;<url> ESC \ <text> ESC ]8;; ESC \`
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

/// `file://` URL for `path`
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// Link a commit subject: `#<n>` references point at the pull request or
/// issue, everything else at the commit itself. The visible text is exactly
/// `subject`.
pub fn linkify(subject: &str, base_url: &str, hash: &str) -> String {
    let commit_url = format!("{base_url}/commit/{hash}");
    let mut out = String::with_capacity(subject.len() * 2 + 64);
    let mut last = 0;

    for caps in ISSUE_RE.captures_iter(subject) {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        out.push_str(&hyperlink(&commit_url, &subject[last..whole.start()]));

        let issue_url = format!("{base_url}/pull/{}", number.as_str());
        out.push_str(&hyperlink(&issue_url, &Style::IssueRef.paint(whole.as_str())));

        last = whole.end();
    }
    out.push_str(&hyperlink(&commit_url, &subject[last..]));

    out
}

/// GitHub web URL of the first GitHub remote in `git remote -v` output
pub fn github_base_url(remotes: &str) -> Option<String> {
    let caps = GITHUB_RE.captures(remotes)?;
    Some(format!("https://github.com/{}/{}", &caps[1], &caps[2]))
}
