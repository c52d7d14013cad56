//! Incremental rebuild decisions

use std::collections::HashMap;

/// How a submesh's buffers are committed on this pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildDecision {
    /// Topology may have changed: rebuild indices and recreate the section.
    FullRecreate,
    /// Same vertex count as last time: refresh attributes, keep indices.
    Update,
}

/// Tracks the last built vertex count of every submesh index. Each index is
/// judged on its own; a change in one submesh never forces another to be
/// recreated.
#[derive(Clone, Debug, Default)]
pub struct RebuildPolicy {
    built: HashMap<usize, usize>,
}

impl RebuildPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(&self, submesh: usize, vertex_count: usize) -> RebuildDecision {
        match self.built.get(&submesh) {
            Some(&stored) if stored == vertex_count => RebuildDecision::Update,
            _ => RebuildDecision::FullRecreate,
        }
    }

    /// Remember the vertex count a submesh was just built with.
    pub fn record_built(&mut self, submesh: usize, vertex_count: usize) {
        self.built.insert(submesh, vertex_count);
    }

    pub fn stored_vertex_count(&self, submesh: usize) -> Option<usize> {
        self.built.get(&submesh).copied()
    }

    /// Forget every submesh at or beyond `len`.
    pub fn forget_from(&mut self, len: usize) {
        self.built.retain(|&submesh, _| submesh < len);
    }
}
