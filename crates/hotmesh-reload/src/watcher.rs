use std::path::Path;
use std::time::SystemTime;

use tracing::warn;

use crate::error::ReloadError;

/// Check whether `path` changed since `last_modified`.
///
/// Returns the file's new modification time when it is strictly newer than
/// `last_modified`, or when no time was recorded yet. A failed stat is
/// logged and reported as "no change", so the next poll retries against the
/// same baseline.
pub fn poll_for_change(path: &Path, last_modified: Option<SystemTime>) -> Option<SystemTime> {
    let modified = match modified_time(path) {
        Ok(modified) => modified,
        Err(e) => {
            warn!("{}", e);
            return None;
        }
    };

    match last_modified {
        Some(last) if modified <= last => None,
        _ => Some(modified),
    }
}

fn modified_time(path: &Path) -> Result<SystemTime, ReloadError> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| ReloadError::FileStat(path.to_path_buf(), e))
}
