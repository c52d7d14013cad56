use std::path::Path;

use hotmesh_core::{Vec2, Vec3};
use tracing::debug;

use crate::error::ImportError;
use crate::postprocess::{flip_uvs, generate_normals, triangle_list};
use crate::scene::{MeshDescriptor, SceneGraph, SceneNode};

/// Load a Wavefront OBJ file into a scene graph. Each OBJ object becomes a
/// child of the root node owning exactly one mesh. Materials are ignored.
pub fn load_obj(path: &Path) -> Result<SceneGraph, ImportError> {
    let load_opts = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &load_opts)
        .map_err(|e| ImportError::ObjLoadFailed(path.to_path_buf(), e.to_string()))?;

    let mut root = SceneNode::new("root");
    let mut meshes = Vec::with_capacity(models.len());

    for model in models {
        let mesh = model.mesh;

        let positions: Vec<Vec3> = mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();
        let faces = triangle_list(&mesh.indices);

        let normals = if mesh.normals.is_empty() {
            generate_normals(&positions, &faces)
        } else {
            mesh.normals
                .chunks_exact(3)
                .map(|n| Vec3::new(n[0], n[1], n[2]))
                .collect()
        };

        let uvs = (!mesh.texcoords.is_empty()).then(|| {
            let mut uvs: Vec<Vec2> = mesh
                .texcoords
                .chunks_exact(2)
                .map(|t| Vec2::new(t[0], t[1]))
                .collect();
            flip_uvs(&mut uvs);
            uvs
        });

        debug!(
            "OBJ object '{}': {} vertices, {} faces",
            model.name,
            positions.len(),
            faces.len()
        );

        root.children
            .push(SceneNode::new(model.name.clone()).with_meshes([meshes.len()]));
        meshes.push(MeshDescriptor {
            name: model.name,
            positions,
            normals,
            uvs,
            faces,
        });
    }

    Ok(SceneGraph { root, meshes })
}
