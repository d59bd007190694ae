//! Aggregation of `git diff --numstat` output onto directory entries.
//!
//! Each numstat line is `added<TAB>removed<TAB>path`. Lines are grouped by the
//! first component of their path and summed, so a change anywhere below a
//! subdirectory shows up on that subdirectory's row.

use crate::core::{git_status::first_component, state::Entry};
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Lines added and removed for one entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffTotals {
    pub added: u64,
    pub removed: u64,
}

impl DiffTotals {
    pub fn new(added: u64, removed: u64) -> Self {
        Self { added, removed }
    }

    pub fn total(&self) -> u64 {
        self.added + self.removed
    }
}

impl AddAssign for DiffTotals {
    fn add_assign(&mut self, other: Self) {
        self.added += other.added;
        self.removed += other.removed;
    }
}

/// Parse a numstat count. Binary files report `-`, which counts as 0.
pub fn diff_count(field: &str) -> u64 {
    field.trim().parse().unwrap_or(0)
}

/// Sum numstat lines per first path component
pub fn aggregate_diff_stat(raw: &str) -> BTreeMap<String, DiffTotals> {
    let mut totals: BTreeMap<String, DiffTotals> = BTreeMap::new();

    for line in raw.trim().lines() {
        let mut fields = line.splitn(3, '\t');
        let (Some(added), Some(removed), Some(path)) = (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };

        let key = first_component(path.trim()).to_string();
        *totals.entry(key).or_default() += DiffTotals::new(diff_count(added), diff_count(removed));
    }

    totals
}

/// Attach summed diff totals to every entry that has changes
pub fn parse_diff_stat(raw: &str, entries: &mut [Entry]) {
    let totals = aggregate_diff_stat(raw);
    log::debug!("diffstat covers {} top-level paths", totals.len());

    for entry in entries.iter_mut() {
        if let Some(sum) = totals.get(&entry.name) {
            entry.diff_totals = Some(*sum);
        }
    }
}
