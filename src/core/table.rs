//! Column-aligned report rendering.
//!
//! Rendering happens in two passes. The first measures the widest status,
//! diff graph and name over all entries; the second writes one line per entry,
//! tracking how many columns the line already uses so the trailing commit
//! columns can be dropped or clipped before they would wrap.
//!
//! Line layout:
//! ```text
//! <status> <graph> <name> <date> <author> <subject>
//! ```
//! The status and graph columns are left out entirely when no entry has a
//! status. The author and subject columns are clipped to the terminal width;
//! once the line is full, nothing else is written.

use crate::core::{
    colors::{Style, RESET},
    hyperlink::{file_url, hyperlink, linkify},
    state::Entry,
    width::{clip, printable_width},
};
use std::fmt::Write;
use std::path::Path;

/// Everything the renderer needs besides the entries themselves
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Terminal columns; `None` renders without any width limit
    pub terminal_width: Option<usize>,
    /// GitHub web URL of the repository; `None` disables author and commit links
    pub base_url: Option<&'a str>,
    /// Absolute path of the listed directory
    pub dir: &'a Path,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ColumnWidths {
    status: usize,
    diff_graph: usize,
    name: usize,
}

impl ColumnWidths {
    fn measure(entries: &[Entry]) -> Self {
        entries.iter().fold(Self::default(), |widths, entry| Self {
            status: widths.status.max(printable_width(&entry.status())),
            diff_graph: widths.diff_graph.max(printable_width(&entry.diff_graph)),
            name: widths.name.max(printable_width(&entry.name)),
        })
    }
}

/// Render every entry into the report table
pub fn render(entries: &[Entry], ctx: &RenderContext) -> String {
    let widths = ColumnWidths::measure(entries);
    log::debug!(
        "column widths: status={} graph={} name={}",
        widths.status,
        widths.diff_graph,
        widths.name
    );

    let mut out = String::with_capacity(entries.len() * (widths.name + 96));
    for entry in entries {
        render_line(&mut out, entry, widths, ctx);
        out.push('\n');
    }
    out
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(' ').take(n));
}

fn is_full(line_width: usize, terminal_width: Option<usize>) -> bool {
    terminal_width.is_some_and(|max| line_width >= max)
}

/// Columns left for a clipped field, keeping one for the separating space
fn budget(line_width: usize, terminal_width: Option<usize>) -> usize {
    match terminal_width {
        Some(max) => max.saturating_sub(1).saturating_sub(line_width),
        None => usize::MAX,
    }
}

fn render_line(out: &mut String, entry: &Entry, widths: ColumnWidths, ctx: &RenderContext) {
    let mut line_width = 0;

    if widths.status > 0 {
        let status = entry.status();
        out.push_str(&status);
        pad(out, widths.status - printable_width(&status) + 1);
        line_width += widths.status + 1;

        out.push_str(&entry.diff_graph);
        pad(out, widths.diff_graph - printable_width(&entry.diff_graph) + 1);
        line_width += widths.diff_graph + 1;
    }

    let style = Style::for_entry(entry.is_dir, entry.is_executable);
    if let Some(style) = style {
        out.push_str(style.escape());
    }
    out.push_str(&hyperlink(&file_url(&ctx.dir.join(&entry.name)), &entry.name));
    pad(out, widths.name - printable_width(&entry.name));
    if style.is_some() {
        out.push_str(RESET);
    }
    line_width += widths.name;

    // No history: the date, author and subject columns are empty, so the line
    // ends with the space that would separate the date.
    let Some(commit) = &entry.commit else {
        out.push(' ');
        return;
    };

    let _ = write!(out, " {}", commit.date);
    line_width += printable_width(&commit.date) + 1;

    if is_full(line_width, ctx.terminal_width) {
        return;
    }

    let author = clip(&commit.author, budget(line_width, ctx.terminal_width));
    line_width += printable_width(author) + 1;
    out.push(' ');
    out.push_str(Style::Author.escape());
    match ctx.base_url {
        Some(base) => {
            let author_url = format!("{base}/commits?author={}", commit.author_email);
            out.push_str(&hyperlink(&author_url, author));
        }
        None => out.push_str(author),
    }
    out.push_str(RESET);

    if is_full(line_width, ctx.terminal_width) {
        return;
    }

    let subject = clip(&commit.subject, budget(line_width, ctx.terminal_width));
    out.push(' ');
    match ctx.base_url {
        Some(base) => out.push_str(&linkify(subject, base, &commit.hash)),
        None => out.push_str(subject),
    }
}
