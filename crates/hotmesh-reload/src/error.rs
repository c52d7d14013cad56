use std::path::PathBuf;

use hotmesh_assets::ImportError;

/// Errors that can stop a reload. None of them touch committed submeshes.
#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error("failed to stat '{0}': {1}")]
    FileStat(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Import(#[from] ImportError),
}
