//! `+++--` graph for a diff total, in the manner of `git diff --stat`.

use crate::core::{
    colors::{Style, RESET},
    diffstat::DiffTotals,
};

/// Default number of glyphs in a graph
pub const DEFAULT_DIFF_WIDTH: usize = 4;

/// Scale `n` into `width` columns relative to `max_change`.
///
/// Scales as if the graph were one column narrower and adds one, so any
/// non-zero count keeps at least one glyph.
pub fn scale_linear(n: u64, width: usize, max_change: u64) -> u64 {
    if n == 0 || max_change == 0 {
        return 0;
    }
    1 + n * (width.saturating_sub(1) as u64) / max_change
}

/// Render `totals` as a colored glyph graph at most about `width` wide.
/// No totals renders as an empty string.
pub fn diff_graph(totals: Option<DiffTotals>, width: usize) -> String {
    let Some(totals) = totals else {
        return String::new();
    };

    let (plus, minus) = if totals.total() <= width as u64 {
        (totals.added, totals.removed)
    } else {
        (
            scale_linear(totals.added, width, totals.total()),
            scale_linear(totals.removed, width, totals.total()),
        )
    };

    format!(
        "{}{}{}{}{}",
        Style::Added.escape(),
        "+".repeat(plus as usize),
        Style::Removed.escape(),
        "-".repeat(minus as usize),
        RESET
    )
}
