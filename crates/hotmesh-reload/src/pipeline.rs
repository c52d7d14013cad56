use std::path::Path;
use std::time::SystemTime;

use hotmesh_assets::{import_scene, traverse};
use hotmesh_mesh::{
    build_submesh, CommitEffect, RebuildPolicy, SubmeshBuffers, SubmeshStore,
};
use tracing::{debug, info, warn};

use crate::error::ReloadError;
use crate::watcher::poll_for_change;

/// Summary of one successful import pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReloadReport {
    /// Number of meshes the traversal visited.
    pub submeshes: usize,
    /// Commits made this pass, in traversal order.
    pub effects: Vec<CommitEffect>,
    /// Submesh indices skipped because their mesh data was malformed.
    pub skipped: Vec<usize>,
    /// Number of trailing submeshes dropped because the scene shrank.
    pub pruned: usize,
}

impl ReloadReport {
    pub fn recreated(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, CommitEffect::Created { .. }))
            .count()
    }

    pub fn updated(&self) -> usize {
        self.effects
            .iter()
            .filter(|e| matches!(e, CommitEffect::Updated { .. }))
            .count()
    }
}

/// Owns the submesh buffers built from one scene file and rebuilds them
/// incrementally when the file changes.
#[derive(Debug, Default)]
pub struct ReloadPipeline {
    submeshes: SubmeshStore,
    policy: RebuildPolicy,
    pending: Vec<CommitEffect>,
}

impl ReloadPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `path` and rebuild every submesh right away.
    ///
    /// On an import failure nothing is committed and the previous buffers
    /// stay as they were.
    pub fn trigger_reload(&mut self, path: &Path) -> Result<ReloadReport, ReloadError> {
        info!("Reloading model '{}'", path.display());

        let scene = import_scene(path).map_err(|e| {
            warn!("Import failed, keeping previous geometry: {}", e);
            ReloadError::from(e)
        })?;

        let mut report = ReloadReport::default();

        for (submesh, mesh) in traverse(&scene) {
            report.submeshes += 1;

            let decision = self.policy.decide(submesh, mesh.vertex_count());
            let record = self.submeshes.ensure(submesh);

            match build_submesh(submesh, record, mesh, decision) {
                Ok(effect) => {
                    self.policy.record_built(submesh, mesh.vertex_count());
                    report.effects.push(effect);
                }
                Err(e) => {
                    warn!("Skipping malformed submesh {} ('{}'): {}", submesh, mesh.name, e);
                    report.skipped.push(submesh);
                }
            }
        }

        let pruned = self.submeshes.truncate(report.submeshes);
        self.policy.forget_from(report.submeshes);
        report.pruned = pruned.len();
        for submesh in pruned {
            debug!("Clearing stale submesh {}", submesh);
            report.effects.push(CommitEffect::Cleared { submesh });
        }

        info!(
            "Reload done: {} submeshes ({} recreated, {} updated, {} skipped, {} cleared)",
            report.submeshes,
            report.recreated(),
            report.updated(),
            report.skipped.len(),
            report.pruned
        );

        self.pending.extend_from_slice(&report.effects);
        Ok(report)
    }

    /// Per-frame hook: poll the file and reload it when it changed.
    ///
    /// Returns the last-known modification time to pass in next frame. The
    /// time advances even if the reload itself fails, so a broken file is
    /// only retried once it changes again.
    pub fn on_frame_tick(
        &mut self,
        path: &Path,
        last_modified: Option<SystemTime>,
    ) -> Option<SystemTime> {
        let Some(modified) = poll_for_change(path, last_modified) else {
            return last_modified;
        };

        if let Err(e) = self.trigger_reload(path) {
            debug!("Reload of '{}' failed: {}", path.display(), e);
        }
        Some(modified)
    }

    /// Borrow the committed buffers of one submesh.
    pub fn submesh_buffers(&self, index: usize) -> Option<SubmeshBuffers<'_>> {
        self.submeshes.get(index).map(|record| record.buffers())
    }

    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Take every commit made since the last call, oldest first.
    pub fn drain_commits(&mut self) -> Vec<CommitEffect> {
        std::mem::take(&mut self.pending)
    }
}
