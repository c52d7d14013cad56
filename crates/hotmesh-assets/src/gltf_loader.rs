use std::collections::HashMap;
use std::path::Path;

use gltf::mesh::Mode;
use hotmesh_core::{Vec2, Vec3};
use tracing::debug;

use crate::error::ImportError;
use crate::postprocess::{
    flip_uvs, generate_normals, triangle_list, triangulate_fan, triangulate_strip,
};
use crate::scene::{MeshDescriptor, SceneGraph, SceneNode};

/// Load a glTF 2.0 file (.gltf or .glb) into a scene graph.
///
/// Only buffer data is read; images are never decoded. The synthetic root
/// node's children are the root nodes of the default scene, or of the first
/// scene when none is marked default.
pub fn load_gltf(path: &Path) -> Result<SceneGraph, ImportError> {
    let fail = |e: gltf::Error| ImportError::GltfLoadFailed(path.to_path_buf(), e.to_string());

    let gltf::Gltf { document, blob } = gltf::Gltf::open(path).map_err(fail)?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob).map_err(fail)?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| ImportError::NoScene(path.to_path_buf()))?;

    let mut converter = MeshConverter {
        buffers: &buffers,
        converted: HashMap::new(),
        meshes: Vec::new(),
    };

    let mut root = SceneNode::new(scene.name().unwrap_or("root"));
    for node in scene.nodes() {
        root.children.push(converter.convert_node(&node));
    }

    debug!(
        "glTF '{}': {} root nodes, {} meshes",
        path.display(),
        root.children.len(),
        converter.meshes.len()
    );

    Ok(SceneGraph {
        root,
        meshes: converter.meshes,
    })
}

/// Converts glTF meshes into descriptors, once per glTF mesh so that
/// instanced meshes share their descriptor slots.
struct MeshConverter<'a> {
    buffers: &'a [gltf::buffer::Data],
    converted: HashMap<usize, Vec<usize>>,
    meshes: Vec<MeshDescriptor>,
}

impl MeshConverter<'_> {
    fn convert_node(&mut self, node: &gltf::Node) -> SceneNode {
        let name = node
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("node_{}", node.index()));
        let mut scene_node = SceneNode::new(name);

        if let Some(mesh) = node.mesh() {
            let slots = self.convert_mesh(&mesh);
            scene_node.meshes.extend(slots);
        }

        for child in node.children() {
            scene_node.children.push(self.convert_node(&child));
        }

        scene_node
    }

    fn convert_mesh(&mut self, mesh: &gltf::Mesh) -> Vec<usize> {
        if let Some(slots) = self.converted.get(&mesh.index()) {
            return slots.clone();
        }

        let name = mesh
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("mesh_{}", mesh.index()));
        let multiple = mesh.primitives().count() > 1;

        let mut slots = Vec::new();
        for primitive in mesh.primitives() {
            let primitive_name = if multiple {
                format!("{}#{}", name, primitive.index())
            } else {
                name.clone()
            };

            if let Some(descriptor) = self.convert_primitive(primitive_name, &primitive) {
                slots.push(self.meshes.len());
                self.meshes.push(descriptor);
            }
        }

        debug!("Converted mesh '{}' into {} submeshes", name, slots.len());
        self.converted.insert(mesh.index(), slots.clone());
        slots
    }

    fn convert_primitive(&self, name: String, primitive: &gltf::Primitive) -> Option<MeshDescriptor> {
        let buffers = self.buffers;
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let Some(positions) = reader.read_positions() else {
            debug!("Skipping primitive without positions in '{}'", name);
            return None;
        };
        let positions: Vec<Vec3> = positions.map(Vec3::from).collect();

        let indices: Vec<u32> = reader
            .read_indices()
            .map(|idx| idx.into_u32().collect())
            .unwrap_or_else(|| (0..positions.len() as u32).collect());

        let faces = match primitive.mode() {
            Mode::Triangles => triangle_list(&indices),
            Mode::TriangleStrip => triangulate_strip(&indices),
            Mode::TriangleFan => triangulate_fan(&indices),
            mode => {
                debug!("Skipping {:?} primitive in '{}'", mode, name);
                return None;
            }
        };

        let normals = match reader.read_normals() {
            Some(normals) => normals.map(Vec3::from).collect(),
            None => generate_normals(&positions, &faces),
        };

        let uvs = reader.read_tex_coords(0).map(|tc| {
            let mut uvs: Vec<Vec2> = tc.into_f32().map(Vec2::from).collect();
            flip_uvs(&mut uvs);
            uvs
        });

        Some(MeshDescriptor {
            name,
            positions,
            normals,
            uvs,
            faces,
        })
    }
}
