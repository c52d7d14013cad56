//! hotmesh Assets - Scene import and traversal
//!
//! Loads glTF 2.0 and OBJ scenes into a renderer-agnostic scene graph and
//! walks it in the stable order used to assign submesh indices.

mod error;
mod gltf_loader;
mod importer;
mod obj_loader;
mod postprocess;
mod scene;
mod traverse;

pub use error::{ImportError, MalformedMesh};
pub use importer::{import_scene, SceneFormat};
pub use scene::{MeshDescriptor, SceneGraph, SceneNode};
pub use traverse::traverse;
