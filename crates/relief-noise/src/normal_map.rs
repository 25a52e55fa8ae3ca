//! Normal maps derived from a height map with a Sobel kernel.

use glam::Vec3;
use relief_image::Image;

/// Fixed z component of the unnormalized gradient normal. Smaller values
/// exaggerate slopes.
pub const NORMAL_Z: f32 = 0.5;

/// Channels of the RGBA normal map.
pub const NORMAL_MAP_DEPTH: usize = 4;

/// Height at `(row, column)` with coordinates clamped to the image edge.
fn clamp_at_edge_height(heights: &Image<f32>, row: isize, column: isize) -> f32 {
    let max_row = heights.height() as isize - 1;
    let max_column = heights.width() as isize - 1;
    heights.get(
        row.clamp(0, max_row) as usize,
        column.clamp(0, max_column) as usize,
        0,
    )
}

/// Map a unit vector from `[-1, 1]` to `[0, 255]` per component.
fn cast_normal_to_rgb(normal: Vec3) -> [u8; 3] {
    let rgb = (normal + Vec3::ONE) / 2.0 * 255.0;
    [rgb.x as u8, rgb.y as u8, rgb.z as u8]
}

/// Sobel normal at pixel `(i, j)`. Rows grow downward, columns to the right.
pub fn sobel_normal(heights: &Image<f32>, i: usize, j: usize) -> Vec3 {
    let (i, j) = (i as isize, j as isize);
    let h = |di: isize, dj: isize| clamp_at_edge_height(heights, i + di, j + dj);

    let top_left = h(-1, -1);
    let top = h(-1, 0);
    let top_right = h(-1, 1);
    let left = h(0, -1);
    let right = h(0, 1);
    let bottom_left = h(1, -1);
    let bottom = h(1, 0);
    let bottom_right = h(1, 1);

    let dx = (top_right + 2.0 * right + bottom_right) - (top_left + 2.0 * left + bottom_left);
    let dy = (bottom_left + 2.0 * bottom + bottom_right) - (top_left + 2.0 * top + top_right);
    Vec3::new(dx, dy, NORMAL_Z).normalize()
}

/// Build an RGBA8 normal map (alpha 255) from a single-channel height map.
pub fn compute_normal_map(heights: &Image<f32>) -> Image<u8> {
    let (width, height) = heights.dimensions();
    let mut normals = Image::new(width, height, NORMAL_MAP_DEPTH);

    for i in 0..height {
        for j in 0..width {
            let [r, g, b] = cast_normal_to_rgb(sobel_normal(heights, i, j));
            normals.set_pixel(i, j, &[r, g, b, 255]);
        }
    }

    tracing::debug!(width, height, "normal map generated");
    normals
}
