//! Directory enumeration for the report.

use crate::core::{
    error::{GitLsError, Result},
    state::Entry,
};
use std::fs;
use std::path::Path;

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    false
}

/// One [`Entry`] per item in `dir`, sorted by name
pub fn read_entries(dir: &Path) -> Result<Vec<Entry>> {
    if !dir.is_dir() {
        return Err(GitLsError::not_a_directory(dir));
    }

    let read_dir = fs::read_dir(dir).map_err(|e| GitLsError::directory_read(dir, e))?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|e| GitLsError::directory_read(dir, e))?;
        let name = item.file_name().to_string_lossy().into_owned();
        let is_dir = item.file_type().map(|t| t.is_dir()).unwrap_or(false);
        // fs::metadata follows symlinks; dangling ones are simply not executable
        let is_exe = !is_dir
            && fs::metadata(item.path())
                .map(|m| is_executable(&m))
                .unwrap_or(false);

        entries.push(Entry::new(name, is_dir, is_exe));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("read {} entries from {}", entries.len(), dir.display());
    Ok(entries)
}
