//! Aggregation of `git status --porcelain --ignored` output onto entries.
//!
//! Porcelain lines are `XY path` with paths relative to the repository root.
//! Each path is made relative to the report directory and grouped by its first
//! component, so every entry ends up with the set of status codes found at or
//! below it.
//!
//! # Public API
//! - [`parse_status`]: Fill in `status_codes` for a slice of entries
//! - [`aggregate_status`]: The underlying path-prefix → code-set mapping
//! - [`first_component`], [`relative_to`], [`unquote_path`]: Path helpers

use crate::core::state::Entry;
use std::collections::{BTreeMap, BTreeSet};

/// Name of the repository metadata directory
pub const METADATA_DIR: &str = ".git";
/// Status token always shown for [`METADATA_DIR`]
pub const METADATA_STATUS: &str = "*";
/// Porcelain code for ignored paths
pub const IGNORED_CODE: &str = "!!";
/// What [`IGNORED_CODE`] is displayed as
pub const IGNORED_STATUS: &str = "I";

/// First component of a `/`-separated path: `"some/file/path"` → `"some"`
pub fn first_component(path: &str) -> &str {
    match path.find(std::path::is_separator) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Express `path` relative to `base`, both relative to the same root.
///
/// Paths that leave `base` climb out with `..` components, so they can never
/// collide with an entry name.
pub fn relative_to(base: &str, path: &str) -> String {
    let components = |p: &str| -> Vec<String> {
        p.split('/')
            .filter(|c| !c.is_empty() && *c != ".")
            .map(str::to_string)
            .collect()
    };
    let base = components(base);
    let path = components(path);

    let common = base
        .iter()
        .zip(path.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel: Vec<&str> = std::iter::repeat("..").take(base.len() - common).collect();
    rel.extend(path[common..].iter().map(String::as_str));

    if rel.is_empty() {
        ".".to_string()
    } else {
        rel.join("/")
    }
}

/// Undo git's C-style quoting of unusual path names (`"a\"b\303\251"`)
pub fn unquote_path(path: &str) -> String {
    let Some(inner) = path
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('a') => bytes.push(0x07),
            Some('b') => bytes.push(0x08),
            Some('f') => bytes.push(0x0c),
            Some('v') => bytes.push(0x0b),
            Some(d @ '0'..='7') => {
                let mut value = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                bytes.push(value as u8);
            }
            Some(other) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => bytes.push(b'\\'),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Path a porcelain line is about. Renames and copies report `old -> new`;
/// the destination is what exists in the listing.
fn status_path(raw: &str) -> String {
    let target = match raw.rsplit_once(" -> ") {
        Some((_, to)) => to,
        None => raw,
    };
    unquote_path(target)
}

/// Group porcelain status codes by the first component of each path,
/// relative to `relative_base` (the report directory inside the repository).
pub fn aggregate_status(raw: &str, relative_base: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut statuses: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for line in raw.split('\n') {
        let (Some(code), Some(path)) = (line.get(..2), line.get(3..)) else {
            continue;
        };
        if path.is_empty() {
            continue;
        }

        // Paths outside the report directory aggregate under "..", which
        // never matches a listed name.
        let rel = relative_to(relative_base, &status_path(path));
        let key = first_component(&rel).to_string();

        let code = if code == IGNORED_CODE {
            IGNORED_STATUS
        } else {
            code
        };
        statuses.entry(key).or_default().insert(code.to_string());
    }

    statuses
}

/// Fill in each entry's status codes from raw porcelain output
pub fn parse_status(raw: &str, entries: &mut [Entry], relative_base: &str) {
    let mut statuses = aggregate_status(raw, relative_base);
    log::debug!("status covers {} top-level paths", statuses.len());

    for entry in entries.iter_mut() {
        if let Some(codes) = statuses.remove(&entry.name) {
            entry.status_codes = codes;
        }
        if entry.name == METADATA_DIR {
            entry.status_codes = BTreeSet::from([METADATA_STATUS.to_string()]);
        }
    }
}
