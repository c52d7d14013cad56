//! Per-vertex attribute types stored in submesh buffers

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Tangent direction for a single vertex
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Tangent {
    pub vector: Vec3,
    /// Bitangent sign: `1.0` or `-1.0`
    pub sign: f32,
}

/// 8-bit RGBA vertex color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct VertexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}
