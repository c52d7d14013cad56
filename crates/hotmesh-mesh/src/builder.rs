//! Mesh descriptor to submesh buffer conversion

use hotmesh_assets::{MalformedMesh, MeshDescriptor};
use hotmesh_core::Vec2;
use tracing::{debug, info};

use crate::policy::RebuildDecision;
use crate::submesh::SubmeshRecord;

/// What a commit means for the consumer of a submesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitEffect {
    /// Topology changed: recreate the section and its collision.
    Created {
        submesh: usize,
        vertex_count: usize,
        index_count: usize,
    },
    /// Attributes refreshed, indices unchanged.
    Updated { submesh: usize, vertex_count: usize },
    /// The submesh no longer exists in the scene.
    Cleared { submesh: usize },
}

/// Write one mesh into its submesh record.
///
/// The descriptor is validated first; a malformed mesh leaves the record
/// untouched. Faces are emitted with reversed winding, `(a, b, c)` becoming
/// `(c, b, a)`, and only on [`RebuildDecision::FullRecreate`].
pub fn build_submesh(
    submesh: usize,
    record: &mut SubmeshRecord,
    mesh: &MeshDescriptor,
    decision: RebuildDecision,
) -> Result<CommitEffect, MalformedMesh> {
    mesh.validate()?;

    let vertex_count = mesh.vertex_count();

    record.vertices.clear();
    record.vertices.extend_from_slice(&mesh.positions);

    record.normals.clear();
    record.normals.extend_from_slice(&mesh.normals);

    record.uvs.clear();
    match &mesh.uvs {
        Some(uvs) => record.uvs.extend_from_slice(uvs),
        None => record.uvs.resize(vertex_count, Vec2::ZERO),
    }

    // No source attribute feeds these yet.
    record.tangents.clear();
    record.colors.clear();

    record.vertex_count = vertex_count;

    match decision {
        RebuildDecision::FullRecreate => {
            record.indices.clear();
            record.indices.reserve(mesh.faces.len() * 3);
            for &[a, b, c] in &mesh.faces {
                record.indices.extend_from_slice(&[c, b, a]);
            }

            info!(
                "Full recreation of submesh {} ('{}'): {} vertices, {} indices",
                submesh,
                mesh.name,
                vertex_count,
                record.indices.len()
            );
            Ok(CommitEffect::Created {
                submesh,
                vertex_count,
                index_count: record.indices.len(),
            })
        }
        RebuildDecision::Update => {
            debug!("Update of submesh {} ('{}')", submesh, mesh.name);
            Ok(CommitEffect::Updated {
                submesh,
                vertex_count,
            })
        }
    }
}
