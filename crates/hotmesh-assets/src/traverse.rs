use tracing::warn;

use crate::scene::{MeshDescriptor, SceneGraph, SceneNode};

/// Walk the scene graph pre-order, depth-first, and number every mesh
/// reference with a pass-wide submesh index.
///
/// A node's own meshes are visited in list order before its children. The
/// order only depends on the graph, so the same scene always yields the
/// same indices.
pub fn traverse(scene: &SceneGraph) -> Vec<(usize, &MeshDescriptor)> {
    let mut visited = Vec::with_capacity(scene.mesh_reference_count());
    visit(&scene.root, &scene.meshes, &mut visited);
    visited
}

fn visit<'a>(
    node: &'a SceneNode,
    meshes: &'a [MeshDescriptor],
    visited: &mut Vec<(usize, &'a MeshDescriptor)>,
) {
    for &slot in &node.meshes {
        match meshes.get(slot) {
            Some(mesh) => visited.push((visited.len(), mesh)),
            None => warn!("Node '{}' references missing mesh {}", node.name, slot),
        }
    }

    for child in &node.children {
        visit(child, meshes, visited);
    }
}
