//! hotmesh Core - Vertex attribute types shared by the reload pipeline
//!
//! This crate provides the plain-data types every other crate agrees on:
//! - Mathematical primitives (re-exported from glam)
//! - Per-vertex tangent and color attributes

pub mod types;

pub use glam::{Vec2, Vec3};
pub use types::{Tangent, VertexColor};
