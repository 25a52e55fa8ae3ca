//! Builds the configured terrain mesh and reports its size.

use relief_config::{MeshConfig, MeshMode};
use relief_image::Image;
use relief_math::CubicHermiteCurve;
use relief_mesh::{MeshError, create_grid_patch, grid_mesh_with_scale};

/// Counts the renderer would need to allocate buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshSummary {
    pub mode: MeshMode,
    pub vertices: usize,
    /// Triangles for the grid, patches for the patch mesh.
    pub primitives: usize,
    pub vertex_bytes: usize,
    pub index_bytes: usize,
}

pub fn build_mesh(
    config: &MeshConfig,
    height_map: &Image<f32>,
    curve: &CubicHermiteCurve,
) -> Result<MeshSummary, MeshError> {
    let (map_width, map_height) = height_map.dimensions();
    match config.mode {
        MeshMode::Grid => {
            let (grid_width, grid_height) = config.grid_size(map_width, map_height);
            let mesh = grid_mesh_with_scale(
                grid_width,
                grid_height,
                height_map,
                curve,
                config.vertical_scale,
            )?;
            Ok(MeshSummary {
                mode: MeshMode::Grid,
                vertices: mesh.vertices.len(),
                primitives: mesh.triangle_count(),
                vertex_bytes: mesh.as_bytes().len(),
                index_bytes: mesh.index_bytes().len(),
            })
        }
        MeshMode::Patch => {
            let patches = create_grid_patch(map_width, map_height, config.patch_count)?;
            Ok(MeshSummary {
                mode: MeshMode::Patch,
                vertices: patches.vertices.len(),
                primitives: patches.patch_count(),
                vertex_bytes: patches.as_bytes().len(),
                index_bytes: 0,
            })
        }
    }
}
