//! Per-row report state.
//!
//! An [`Entry`] is created for every item of the listed directory, then filled
//! in by the status aggregator, the diff aggregator and the commit log parser
//! (each owns its own fields) before the table renderer reads it.

use crate::core::{commit::CommitInfo, diffstat::DiffTotals};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    pub is_executable: bool,
    /// Sorted, deduplicated porcelain codes found at or below this entry
    pub status_codes: BTreeSet<String>,
    pub diff_totals: Option<DiffTotals>,
    pub commit: Option<CommitInfo>,
    pub diff_graph: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, is_dir: bool, is_executable: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
            is_executable,
            ..Default::default()
        }
    }

    /// Status column text: codes joined with commas, empty when clean
    pub fn status(&self) -> String {
        self.status_codes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
