use hotmesh_core::{Vec2, Vec3};

use crate::error::MalformedMesh;

/// An imported scene: a node tree plus the flat list of meshes its nodes
/// reference. Valid for one import pass only.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    pub root: SceneNode,
    pub meshes: Vec<MeshDescriptor>,
}

impl SceneGraph {
    /// Total number of mesh references across the whole node tree.
    pub fn mesh_reference_count(&self) -> usize {
        fn count(node: &SceneNode) -> usize {
            node.meshes.len() + node.children.iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }
}

/// A node in the scene tree. Owns its children and indexes into
/// [`SceneGraph::meshes`].
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    pub name: String,
    pub meshes: Vec<usize>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder-style helper to attach mesh indices.
    pub fn with_meshes(mut self, meshes: impl IntoIterator<Item = usize>) -> Self {
        self.meshes.extend(meshes);
        self
    }

    /// Builder-style helper to attach a child node.
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Raw triangulated geometry for one mesh, as produced by the importer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshDescriptor {
    pub name: String,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// First texture-coordinate channel, if the source has one.
    pub uvs: Option<Vec<Vec2>>,
    pub faces: Vec<[u32; 3]>,
}

impl MeshDescriptor {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Check that every per-vertex array matches the vertex count and that
    /// every face stays in range.
    pub fn validate(&self) -> Result<(), MalformedMesh> {
        let positions = self.positions.len();

        if self.normals.len() != positions {
            return Err(MalformedMesh::NormalCountMismatch {
                positions,
                normals: self.normals.len(),
            });
        }

        if let Some(uvs) = &self.uvs {
            if uvs.len() != positions {
                return Err(MalformedMesh::UvCountMismatch {
                    positions,
                    uvs: uvs.len(),
                });
            }
        }

        for (face, indices) in self.faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions) {
                return Err(MalformedMesh::IndexOutOfRange {
                    face,
                    index,
                    vertex_count: positions,
                });
            }
        }

        Ok(())
    }
}
