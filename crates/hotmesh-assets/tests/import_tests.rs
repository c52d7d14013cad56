use std::path::{Path, PathBuf};

use hotmesh_assets::{import_scene, traverse, ImportError};
use hotmesh_core::{Vec2, Vec3};
use tempfile::TempDir;

const CUBE_POSITIONS: &str = "\
v -1 -1 -1
v 1 -1 -1
v 1 1 -1
v -1 1 -1
v -1 -1 1
v 1 -1 1
v 1 1 1
v -1 1 1
";

fn write(dir: &TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn cube_with_face_normals() -> String {
    format!(
        "o cube\n{CUBE_POSITIONS}\
vn 0 0 -1
vn 0 0 1
vn -1 0 0
vn 1 0 0
vn 0 -1 0
vn 0 1 0
f 1//1 4//1 3//1 2//1
f 5//2 6//2 7//2 8//2
f 1//3 5//3 8//3 4//3
f 2//4 3//4 7//4 6//4
f 1//5 2//5 6//5 5//5
f 4//6 8//6 7//6 3//6
"
    )
}

fn cube_without_normals() -> String {
    format!(
        "o cube\n{CUBE_POSITIONS}\
f 1 4 3 2
f 5 6 7 8
f 1 5 8 4
f 2 3 7 6
f 1 2 6 5
f 4 8 7 3
"
    )
}

#[test]
fn obj_cube_with_face_normals_is_unshared_and_triangulated() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cube.obj", cube_with_face_normals());

    let scene = import_scene(&path).unwrap();
    assert_eq!(scene.meshes.len(), 1);
    assert_eq!(scene.root.children.len(), 1);

    let cube = &scene.meshes[0];
    assert_eq!(cube.vertex_count(), 24);
    assert_eq!(cube.faces.len(), 12);
    assert_eq!(cube.normals.len(), 24);
    assert!(cube.uvs.is_none());
    assert!(cube.validate().is_ok());
}

#[test]
fn obj_cube_without_normals_gets_generated_normals() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cube.obj", cube_without_normals());

    let scene = import_scene(&path).unwrap();
    let cube = &scene.meshes[0];

    assert_eq!(cube.vertex_count(), 8);
    assert_eq!(cube.normals.len(), 8);
    for normal in &cube.normals {
        assert!((normal.length() - 1.0).abs() < 1e-5, "normal {normal:?} not unit length");
    }
}

#[test]
fn obj_texcoords_are_flipped_vertically() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "tri.obj",
        "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0.25\nvt 1 0.25\nvt 0 1\nf 1/1 2/2 3/3\n",
    );

    let scene = import_scene(&path).unwrap();
    let uvs = scene.meshes[0].uvs.as_ref().expect("uv channel");
    assert_eq!(
        uvs,
        &vec![Vec2::new(0.0, 0.75), Vec2::new(1.0, 0.75), Vec2::new(0.0, 0.0)]
    );
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cube.fbx", "not really fbx");

    match import_scene(&path) {
        Err(ImportError::UnsupportedFormat(p)) => assert_eq!(p, path),
        other => panic!("expected UnsupportedFormat, got: {:?}", other),
    }
}

#[test]
fn corrupt_gltf_fails_without_partial_scene() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.gltf", "{ this is not json");

    match import_scene(&path) {
        Err(ImportError::GltfLoadFailed(p, _)) => assert_eq!(p, path),
        other => panic!("expected GltfLoadFailed, got: {:?}", other),
    }
}

#[test]
fn gltf_without_meshes_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "empty.gltf",
        r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [ { "nodes": [0] } ],
  "nodes": [ { "name": "camera_rig" } ]
}"#,
    );

    match import_scene(&path) {
        Err(ImportError::EmptyScene(p)) => assert_eq!(p, path),
        other => panic!("expected EmptyScene, got: {:?}", other),
    }
}

/// Writes a glTF scene whose node tree is
/// `parent[tri] -> { child[strip], instance[tri] }`.
fn write_gltf_scene(dir: &Path) -> PathBuf {
    let tri_positions: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
    let tri_uvs: [[f32; 2]; 3] = [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let strip_positions: [[f32; 3]; 4] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.0],
    ];
    let tri_indices: [u16; 3] = [0, 1, 2];

    let mut bin: Vec<u8> = Vec::new();
    bin.extend_from_slice(bytemuck::cast_slice(&tri_positions)); // 0..36
    bin.extend_from_slice(bytemuck::cast_slice(&tri_uvs)); // 36..60
    bin.extend_from_slice(bytemuck::cast_slice(&strip_positions)); // 60..108
    bin.extend_from_slice(bytemuck::cast_slice(&tri_indices)); // 108..114
    bin.resize(116, 0);
    std::fs::write(dir.join("scene.bin"), &bin).unwrap();

    let json = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [ { "nodes": [0] } ],
  "nodes": [
    { "name": "parent", "mesh": 0, "children": [1, 2] },
    { "name": "child", "mesh": 1 },
    { "name": "instance", "mesh": 0 }
  ],
  "meshes": [
    { "name": "tri", "primitives": [ { "attributes": { "POSITION": 0, "TEXCOORD_0": 1 }, "indices": 3 } ] },
    { "name": "strip", "primitives": [ { "attributes": { "POSITION": 2 }, "mode": 5 } ] }
  ],
  "buffers": [ { "uri": "scene.bin", "byteLength": 116 } ],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
    { "buffer": 0, "byteOffset": 36, "byteLength": 24 },
    { "buffer": 0, "byteOffset": 60, "byteLength": 48 },
    { "buffer": 0, "byteOffset": 108, "byteLength": 6 }
  ],
  "accessors": [
    { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3", "min": [0, 0, 0], "max": [1, 1, 0] },
    { "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC2" },
    { "bufferView": 2, "componentType": 5126, "count": 4, "type": "VEC3", "min": [0, 0, 0], "max": [1, 1, 0] },
    { "bufferView": 3, "componentType": 5123, "count": 3, "type": "SCALAR" }
  ]
}"#;
    let path = dir.join("scene.gltf");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn gltf_scene_shares_instanced_meshes() {
    let dir = TempDir::new().unwrap();
    let path = write_gltf_scene(dir.path());

    let scene = import_scene(&path).unwrap();

    // One descriptor per glTF mesh, even though "tri" is referenced twice.
    assert_eq!(scene.meshes.len(), 2);
    assert_eq!(scene.mesh_reference_count(), 3);

    let parent = &scene.root.children[0];
    assert_eq!(parent.name, "parent");
    let child_names: Vec<&str> = parent.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(child_names, vec!["child", "instance"]);
}

#[test]
fn gltf_traversal_order_follows_the_node_tree() {
    let dir = TempDir::new().unwrap();
    let path = write_gltf_scene(dir.path());

    let scene = import_scene(&path).unwrap();
    let visited: Vec<(usize, &str)> = traverse(&scene)
        .into_iter()
        .map(|(i, m)| (i, m.name.as_str()))
        .collect();

    assert_eq!(visited, vec![(0, "tri"), (1, "strip"), (2, "tri")]);
}

#[test]
fn gltf_primitives_are_normalized() {
    let dir = TempDir::new().unwrap();
    let path = write_gltf_scene(dir.path());

    let scene = import_scene(&path).unwrap();
    let tri = scene.meshes.iter().find(|m| m.name == "tri").unwrap();
    let strip = scene.meshes.iter().find(|m| m.name == "strip").unwrap();

    assert_eq!(tri.faces, vec![[0, 1, 2]]);
    assert_eq!(
        tri.uvs.as_deref(),
        Some(&[Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)][..])
    );

    assert_eq!(strip.faces, vec![[0, 1, 2], [2, 1, 3]]);
    assert!(strip.uvs.is_none());
    for normal in &strip.normals {
        assert!((*normal - Vec3::Z).length() < 1e-6);
    }
}
