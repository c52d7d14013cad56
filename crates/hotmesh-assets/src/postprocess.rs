//! Import-time normalization applied to every mesh.

use hotmesh_core::{Vec2, Vec3};

/// Group a triangle-list index stream into faces. Trailing indices that do
/// not form a full triangle are dropped.
pub(crate) fn triangle_list(indices: &[u32]) -> Vec<[u32; 3]> {
    indices
        .chunks_exact(3)
        .map(|tri| [tri[0], tri[1], tri[2]])
        .collect()
}

/// Convert a triangle strip into a triangle list, keeping a consistent
/// winding by swapping the first two indices of every odd triangle.
pub(crate) fn triangulate_strip(indices: &[u32]) -> Vec<[u32; 3]> {
    indices
        .windows(3)
        .enumerate()
        .map(|(i, w)| {
            if i % 2 == 0 {
                [w[0], w[1], w[2]]
            } else {
                [w[1], w[0], w[2]]
            }
        })
        .collect()
}

/// Convert a triangle fan into a triangle list.
pub(crate) fn triangulate_fan(indices: &[u32]) -> Vec<[u32; 3]> {
    let Some((&hub, rest)) = indices.split_first() else {
        return Vec::new();
    };
    rest.windows(2).map(|w| [hub, w[0], w[1]]).collect()
}

/// Flip the vertical texture axis in place.
pub(crate) fn flip_uvs(uvs: &mut [Vec2]) {
    for uv in uvs {
        uv.y = 1.0 - uv.y;
    }
}

/// Area-weighted vertex normals. Faces referencing missing vertices are
/// ignored; vertices touched by no usable face get a zero normal.
pub(crate) fn generate_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for face in faces {
        let [a, b, c] = face.map(|i| i as usize);
        let (Some(&pa), Some(&pb), Some(&pc)) =
            (positions.get(a), positions.get(b), positions.get(c))
        else {
            continue;
        };

        // Cross product length is twice the triangle area.
        let weighted = (pb - pa).cross(pc - pa);
        normals[a] += weighted;
        normals[b] += weighted;
        normals[c] += weighted;
    }

    normals.into_iter().map(Vec3::normalize_or_zero).collect()
}
