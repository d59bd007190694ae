//! Last-commit records produced by `git log -1 --pretty=format:...`.
//!
//! The record fields are separated by NUL because subjects routinely contain
//! `|`, tabs and other punctuation.

use crate::core::{
    error::{GitLsError, Result},
    state::Entry,
};

/// Field separator of a log record
pub const FIELD_SEPARATOR: char = '\0';
const FIELD_COUNT: usize = 5;

/// `--pretty` format matching [`parse_commit_record`]
pub const LOG_FORMAT: &str = "--pretty=format:%h%x00%ad%x00%aN%x00%aE%x00%s";
pub const DATE_FORMAT: &str = "--date=format:%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub date: String,
    pub author: String,
    pub author_email: String,
    pub subject: String,
}

/// Parse one log record. An empty record means the path has no history.
pub fn parse_commit_record(record: &str) -> Result<Option<CommitInfo>> {
    let record = record.strip_suffix('\n').unwrap_or(record);
    if record.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = record.splitn(FIELD_COUNT, FIELD_SEPARATOR).collect();
    let &[hash, date, author, author_email, subject] = fields.as_slice() else {
        return Err(GitLsError::unexpected_log_format(record));
    };

    Ok(Some(CommitInfo {
        hash: hash.to_string(),
        date: date.to_string(),
        author: author.to_string(),
        author_email: author_email.to_string(),
        subject: subject.to_string(),
    }))
}

/// Attach the commit described by `record` to `entry`
pub fn parse_commit(record: &str, entry: &mut Entry) -> Result<()> {
    entry.commit = parse_commit_record(record)?;
    Ok(())
}
