//! Per-submesh buffer storage

use std::ops::Range;

use hotmesh_core::{Tangent, Vec2, Vec3, VertexColor};

/// Buffers for one submesh, as last committed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmeshRecord {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub tangents: Vec<Tangent>,
    pub colors: Vec<VertexColor>,
    pub indices: Vec<u32>,
    /// Vertex count as of the last successful build.
    pub vertex_count: usize,
}

impl SubmeshRecord {
    /// Borrow every buffer at once.
    pub fn buffers(&self) -> SubmeshBuffers<'_> {
        SubmeshBuffers {
            vertices: &self.vertices,
            normals: &self.normals,
            uvs: &self.uvs,
            tangents: &self.tangents,
            colors: &self.colors,
            indices: &self.indices,
        }
    }
}

/// Read-only view of a submesh's buffers for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubmeshBuffers<'a> {
    pub vertices: &'a [Vec3],
    pub normals: &'a [Vec3],
    pub uvs: &'a [Vec2],
    pub tangents: &'a [Tangent],
    pub colors: &'a [VertexColor],
    pub indices: &'a [u32],
}

impl<'a> SubmeshBuffers<'a> {
    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    pub fn normal_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.normals)
    }

    pub fn uv_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.uvs)
    }

    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }
}

/// Submesh records addressed by traversal index.
#[derive(Clone, Debug, Default)]
pub struct SubmeshStore {
    records: Vec<SubmeshRecord>,
}

impl SubmeshStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the record for `index`, creating zeroed records up to it.
    pub fn ensure(&mut self, index: usize) -> &mut SubmeshRecord {
        if self.records.len() <= index {
            self.records.resize_with(index + 1, SubmeshRecord::default);
        }
        &mut self.records[index]
    }

    pub fn get(&self, index: usize) -> Option<&SubmeshRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record at or beyond `len`, returning the dropped indices.
    pub fn truncate(&mut self, len: usize) -> Range<usize> {
        let old_len = self.records.len();
        self.records.truncate(len);
        len.min(old_len)..old_len
    }
}
