//! Height-displaced grid mesh: one vertex per height-map pixel.

use relief_image::Image;
use relief_math::CubicHermiteCurve;

use crate::{IndexedMeshData, MeshError, TerrainVertex};

/// World-space height of a vertex whose redistributed height is `1.0`.
pub const GRID_VERTICAL_SCALE: f32 = 15.0;

/// Build a `width × height` grid mesh with [`GRID_VERTICAL_SCALE`].
///
/// See [`grid_mesh_with_scale`].
pub fn grid_mesh(
    width: usize,
    height: usize,
    height_map: &Image<f32>,
    curve: &CubicHermiteCurve,
) -> Result<IndexedMeshData, MeshError> {
    grid_mesh_with_scale(width, height, height_map, curve, GRID_VERTICAL_SCALE)
}

/// Build a `width × height` grid mesh centered on the origin.
///
/// Vertex `(i, j)` (row-major) sits at
/// `(j - width/2, vertical_scale * curve.evaluate(h).y, i - height/2)` with uv
/// `(j/width, i/height)`, where `h` is the height map value at `(i, j)`. Each
/// grid cell with top-left index `idx` emits the triangles
/// `(idx, idx + width + 1, idx + 1)` and `(idx, idx + width, idx + width + 1)`.
///
/// # Errors
///
/// Returns [`MeshError`] for an empty grid, a grid larger than the height
/// map, more vertices than `u32` indices can address, or a curve that is not
/// defined on all of `[0, 1]`.
pub fn grid_mesh_with_scale(
    width: usize,
    height: usize,
    height_map: &Image<f32>,
    curve: &CubicHermiteCurve,
    vertical_scale: f32,
) -> Result<IndexedMeshData, MeshError> {
    if width == 0 || height == 0 {
        return Err(MeshError::EmptyGrid { width, height });
    }
    let (map_width, map_height) = height_map.dimensions();
    if width > map_width || height > map_height {
        return Err(MeshError::HeightMapTooSmall {
            width,
            height,
            map_width,
            map_height,
        });
    }
    let vertex_count = width * height;
    if u32::try_from(vertex_count).is_err() {
        return Err(MeshError::TooManyVertices(vertex_count));
    }
    if !curve.covers_unit_interval() {
        let (start, end) = curve.domain();
        return Err(MeshError::CurveDomain(start, end));
    }

    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..height {
        for j in 0..width {
            let map_height = height_map.get(i, j, 0);
            let redistributed = curve.evaluate(map_height.clamp(0.0, 1.0)).y;
            vertices.push(TerrainVertex::new(
                [
                    j as f32 - half_width,
                    vertical_scale * redistributed,
                    i as f32 - half_height,
                ],
                [j as f32 / width as f32, i as f32 / height as f32],
            ));
        }
    }

    // Bounded by the u32 check above.
    let w = width as u32;
    let mut indices = Vec::with_capacity((width - 1) * (height - 1) * 6);
    for i in 0..height as u32 - 1 {
        for j in 0..w - 1 {
            let idx = j + i * w;
            // Upper triangle
            indices.extend_from_slice(&[idx, idx + w + 1, idx + 1]);
            // Lower triangle
            indices.extend_from_slice(&[idx, idx + w, idx + w + 1]);
        }
    }

    tracing::debug!(
        width,
        height,
        vertices = vertices.len(),
        triangles = indices.len() / 3,
        "grid mesh built"
    );
    Ok(IndexedMeshData { vertices, indices })
}
