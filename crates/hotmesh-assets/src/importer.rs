use std::path::Path;

use tracing::debug;

use crate::error::ImportError;
use crate::scene::SceneGraph;
use crate::{gltf_loader, obj_loader};

/// Scene file formats the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneFormat {
    Gltf,
    Obj,
}

impl SceneFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "gltf" | "glb" => Some(Self::Gltf),
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }
}

/// Parse a scene file from disk.
///
/// Every mesh comes back triangulated, with its V texture axis flipped and
/// with vertex normals generated when the source had none. Nothing is
/// cached: each call re-reads the file.
///
/// A file that parses but yields no vertices at all (an empty or truncated
/// OBJ, a glTF without triangle meshes) is an error, not an empty scene.
pub fn import_scene(path: &Path) -> Result<SceneGraph, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }

    let format = SceneFormat::from_path(path)
        .ok_or_else(|| ImportError::UnsupportedFormat(path.to_path_buf()))?;

    let scene = match format {
        SceneFormat::Gltf => gltf_loader::load_gltf(path)?,
        SceneFormat::Obj => obj_loader::load_obj(path)?,
    };

    if scene.meshes.iter().all(|mesh| mesh.positions.is_empty()) {
        return Err(ImportError::EmptyScene(path.to_path_buf()));
    }

    debug!(
        "Imported '{}' as {:?}: {} meshes, {} mesh references",
        path.display(),
        format,
        scene.meshes.len(),
        scene.mesh_reference_count()
    );

    Ok(scene)
}
