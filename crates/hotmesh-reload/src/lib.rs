//! hotmesh Reload - Hot reloading of scene files into submesh buffers
//!
//! The host drives a [`ReloadPipeline`] with a file path, either every frame
//! through [`ReloadPipeline::on_frame_tick`] or on demand through
//! [`ReloadPipeline::trigger_reload`], and reads the committed buffers back.
//! Everything runs synchronously on the caller's thread.

mod error;
mod pipeline;
mod watcher;

pub use error::ReloadError;
pub use hotmesh_mesh::{CommitEffect, RebuildDecision, SubmeshBuffers};
pub use pipeline::{ReloadPipeline, ReloadReport};
pub use watcher::poll_for_change;
