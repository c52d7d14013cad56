use std::path::PathBuf;

/// Errors that can occur while importing a scene file.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("scene file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported scene format: '{0}'")]
    UnsupportedFormat(PathBuf),

    #[error("failed to load glTF file '{0}': {1}")]
    GltfLoadFailed(PathBuf, String),

    #[error("failed to load OBJ file '{0}': {1}")]
    ObjLoadFailed(PathBuf, String),

    #[error("'{0}' contains no scene")]
    NoScene(PathBuf),

    #[error("'{0}' contains no mesh geometry")]
    EmptyScene(PathBuf),
}

/// Ways a mesh descriptor can break the shared-length invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedMesh {
    #[error("mesh has {positions} positions but {normals} normals")]
    NormalCountMismatch { positions: usize, normals: usize },

    #[error("mesh has {positions} positions but {uvs} UVs")]
    UvCountMismatch { positions: usize, uvs: usize },

    #[error("face {face} references vertex {index}, mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}
