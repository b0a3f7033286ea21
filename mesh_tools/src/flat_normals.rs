// Copyright 2026 the Glimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use render_primitives::Vec3F;

/// Generates one flat normal per triangle face, with duplicates removed.
///
/// `indices` holds triangle faces as index triples into `positions`, wound
/// counter-clockwise; normals follow the right-hand rule. For each face the
/// face normal is computed and deduplicated bit-exactly, and three
/// entries pointing at it are appended to the returned index array, so the
/// result is index-aligned with the input: one normal index per input vertex
/// index. The deduplicated normals come second in the returned pair.
///
/// An index count that is not divisible by 3 produces an empty result.
///
/// # Panics
///
/// Panics if any index is out of bounds for `positions`.
pub fn generate_flat_normals(indices: &[u32], positions: &[Vec3F]) -> (Vec<u32>, Vec<Vec3F>) {
    if indices.len() % 3 != 0 {
        log::warn!(
            "flat normal generation needs triangle faces, got {} indices",
            indices.len()
        );
        return (Vec::new(), Vec::new());
    }

    let mut normal_indices = Vec::with_capacity(indices.len());
    let mut normals = Vec::new();
    // Deduplication keyed on the exact bit patterns of the components.
    let mut seen: HashMap<[u32; 3], u32> = HashMap::new();

    for face in indices.chunks_exact(3) {
        let a = positions[face[0] as usize];
        let b = positions[face[1] as usize];
        let c = positions[face[2] as usize];
        // Right-handed winding: counter-clockwise faces get a +z normal.
        let normal = (b - a).cross(c - a).normalized();

        let key = [normal.x.to_bits(), normal.y.to_bits(), normal.z.to_bits()];
        let index = *seen.entry(key).or_insert_with(|| {
            normals.push(normal);
            normals.len() as u32 - 1
        });
        normal_indices.extend([index; 3]);
    }

    (normal_indices, normals)
}
