//! Flat grid of quad patches for GPU tessellation.

use crate::{MeshError, PatchMeshData, TerrainVertex, VERTICES_PER_PATCH};

/// Split a `width × height` plane centered on the origin into
/// `patch_count × patch_count` quad patches.
///
/// Patches are emitted with `x` as the outer loop and `z` as the inner one.
/// Each patch lists its corners as `p00, p10, p11, p01`: seen from above
/// (`x` right, `z` down) that is bottom-left, bottom-right, top-right,
/// top-left, with `v` growing with `z`. Heights are left at zero for the
/// tessellation stage to displace.
///
/// # Errors
///
/// Returns [`MeshError::ZeroPatches`] if `patch_count` is zero.
pub fn create_grid_patch(
    width: usize,
    height: usize,
    patch_count: usize,
) -> Result<PatchMeshData, MeshError> {
    if patch_count == 0 {
        return Err(MeshError::ZeroPatches);
    }

    let n = patch_count as f32;
    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;
    let horizontal_ratio = width as f32 / n;
    let vertical_ratio = height as f32 / n;

    let corner = |x: usize, z: usize| {
        TerrainVertex::new(
            [
                x as f32 * horizontal_ratio - half_width,
                0.0,
                z as f32 * vertical_ratio - half_height,
            ],
            [x as f32 / n, z as f32 / n],
        )
    };

    let mut vertices = Vec::with_capacity(patch_count * patch_count * VERTICES_PER_PATCH);
    for x in 0..patch_count {
        for z in 0..patch_count {
            vertices.extend_from_slice(&[
                corner(x, z + 1),
                corner(x + 1, z + 1),
                corner(x + 1, z),
                corner(x, z),
            ]);
        }
    }

    tracing::debug!(width, height, patch_count, "patch grid built");
    Ok(PatchMeshData {
        vertices,
        vertices_per_patch: VERTICES_PER_PATCH,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_count() {
        let patches = create_grid_patch(64, 32, 4).unwrap();
        assert_eq!(patches.patch_count(), 16);
        assert_eq!(patches.vertices.len(), 64);
    }

    #[test]
    fn test_first_patch_corners() {
        let patches = create_grid_patch(4, 4, 2).unwrap();
        let first: Vec<_> = patches.patches().next().unwrap().to_vec();
        // p00
        assert_eq!(first[0].position, [-2.0, 0.0, 0.0]);
        assert_eq!(first[0].uv, [0.0, 0.5]);
        // p10
        assert_eq!(first[1].position, [0.0, 0.0, 0.0]);
        assert_eq!(first[1].uv, [0.5, 0.5]);
        // p11
        assert_eq!(first[2].position, [0.0, 0.0, -2.0]);
        assert_eq!(first[2].uv, [0.5, 0.0]);
        // p01
        assert_eq!(first[3].position, [-2.0, 0.0, -2.0]);
        assert_eq!(first[3].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_every_patch_corner_layout() {
        let n = 3;
        let patches = create_grid_patch(6, 9, n).unwrap();
        let nf = n as f32;
        let (hw, hh) = (6.0 / nf, 9.0 / nf);
        let mut corners = patches.patches();
        for x in 0..n {
            for z in 0..n {
                let patch = corners.next().unwrap();
                let (x0, x1) = (x as f32, (x + 1) as f32);
                let (z0, z1) = (z as f32, (z + 1) as f32);
                let expected = [
                    ([x0 * hw - 3.0, 0.0, z1 * hh - 4.5], [x0 / nf, z1 / nf]),
                    ([x1 * hw - 3.0, 0.0, z1 * hh - 4.5], [x1 / nf, z1 / nf]),
                    ([x1 * hw - 3.0, 0.0, z0 * hh - 4.5], [x1 / nf, z0 / nf]),
                    ([x0 * hw - 3.0, 0.0, z0 * hh - 4.5], [x0 / nf, z0 / nf]),
                ];
                for (corner, (vertex, (position, uv))) in patch.iter().zip(expected).enumerate() {
                    assert_eq!(
                        vertex.position, position,
                        "patch ({x}, {z}) corner {corner} position"
                    );
                    assert_eq!(vertex.uv, uv, "patch ({x}, {z}) corner {corner} uv");
                }
            }
        }
        assert!(corners.next().is_none());
    }

    #[test]
    fn test_z_is_inner_loop() {
        let patches = create_grid_patch(4, 4, 2).unwrap();
        let second = &patches.vertices[4..8];
        assert_eq!(second[3].position, [-2.0, 0.0, 0.0], "second patch steps along z");
    }

    #[test]
    fn test_patches_cover_plane_and_stay_flat() {
        let patches = create_grid_patch(10, 6, 3).unwrap();
        for vertex in &patches.vertices {
            let [x, y, z] = vertex.position;
            assert_eq!(y, 0.0);
            assert!((-5.0..=5.0).contains(&x));
            assert!((-3.0..=3.0).contains(&z));
            assert!((0.0..=1.0).contains(&vertex.uv[0]) && (0.0..=1.0).contains(&vertex.uv[1]));
        }
    }

    #[test]
    fn test_zero_patches_rejected() {
        assert_eq!(create_grid_patch(4, 4, 0).unwrap_err(), MeshError::ZeroPatches);
    }
}
