//! Terminal width detection.

use console::Term;

/// Columns of the terminal attached to stdout.
///
/// `None` when stdout is not a terminal or reports zero columns; the report is
/// then rendered without any width limit.
pub fn stdout_columns() -> Option<usize> {
    let columns = Term::stdout().size_checked().map(|(_rows, cols)| cols as usize);
    log::debug!("terminal columns: {columns:?}");
    columns.filter(|&cols| cols > 0)
}
