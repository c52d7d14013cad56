//! hotmesh Mesh - Submesh buffer storage and incremental rebuilds
//!
//! Turns imported mesh descriptors into flat per-submesh buffers and decides,
//! per submesh, whether a reload can update attributes in place or has to
//! recreate topology.

pub mod builder;
pub mod policy;
pub mod submesh;

pub use builder::{build_submesh, CommitEffect};
pub use policy::{RebuildDecision, RebuildPolicy};
pub use submesh::{SubmeshBuffers, SubmeshRecord, SubmeshStore};
