//! Host adapter around the reload pipeline
//!
//! Plays the part of the owning scene object: it holds the watched path and
//! its last-known timestamp, ticks the pipeline once per frame and applies
//! committed sections to a stand-in renderer that only logs.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use hotmesh_reload::{CommitEffect, ReloadError, ReloadPipeline, ReloadReport};
use tracing::{debug, info};

pub struct ModelHost {
    file_path: PathBuf,
    last_modified: Option<SystemTime>,
    pipeline: ReloadPipeline,
}

impl ModelHost {
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            last_modified: None,
            pipeline: ReloadPipeline::new(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Per-frame update.
    pub fn tick(&mut self) {
        self.last_modified = self
            .pipeline
            .on_frame_tick(&self.file_path, self.last_modified);
        self.apply_commits();
    }

    /// Force a reload regardless of the file timestamp.
    pub fn reload(&mut self) -> Result<ReloadReport, ReloadError> {
        let report = self.pipeline.trigger_reload(&self.file_path);
        self.apply_commits();
        report
    }

    fn apply_commits(&mut self) {
        for effect in self.pipeline.drain_commits() {
            match effect {
                CommitEffect::Created { submesh, .. } => {
                    if let Some(buffers) = self.pipeline.submesh_buffers(submesh) {
                        info!(
                            "Create section {}: {} vertices, {} triangles",
                            submesh,
                            buffers.vertices.len(),
                            buffers.indices.len() / 3
                        );
                    }
                }
                CommitEffect::Updated {
                    submesh,
                    vertex_count,
                } => {
                    debug!("Update section {}: {} vertices", submesh, vertex_count);
                }
                CommitEffect::Cleared { submesh } => {
                    info!("Clear section {}", submesh);
                }
            }
        }
    }
}
