//! Biome color maps: each height is colored by the region it falls into.

use relief_image::Image;

use crate::RegionsSettings;

/// Channels of the RGBA color map.
pub const COLOR_MAP_DEPTH: usize = 4;

/// Build an RGBA8 color map from a normalized height map.
///
/// With `encode_height` set, the alpha channel carries `255 * height` so
/// shaders can blend biome textures by elevation; otherwise it keeps the
/// region color's alpha. `regions` must already be validated.
pub fn compute_color_map(
    heights: &Image<f32>,
    regions: &RegionsSettings,
    encode_height: bool,
) -> Image<u8> {
    let (width, height) = heights.dimensions();
    let colors = regions.uint8_colors();
    let mut color_map = Image::new(width, height, COLOR_MAP_DEPTH);

    for i in 0..height {
        for j in 0..width {
            let noise_height = heights.get(i, j, 0);
            let mut color = colors[regions.region_index(noise_height)];
            if encode_height {
                color[3] = (255.0 * noise_height) as u8;
            }
            color_map.set_pixel(i, j, &color);
        }
    }

    tracing::debug!(width, height, regions = regions.len(), "color map generated");
    color_map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Region;

    fn two_band_regions() -> RegionsSettings {
        RegionsSettings::new(vec![
            Region::new("water", 0.5, [0.0, 0.0, 1.0, 1.0]),
            Region::new("land", 1.0, [0.0, 1.0, 0.0, 1.0]),
        ])
        .unwrap()
    }

    fn row(values: &[f32]) -> Image<f32> {
        let mut image = Image::grayscale(values.len(), 1);
        for (j, &v) in values.iter().enumerate() {
            image.set(0, j, 0, v);
        }
        image
    }

    #[test]
    fn test_colors_follow_regions() {
        let heights = row(&[0.0, 0.5, 0.51, 1.0]);
        let colors = compute_color_map(&heights, &two_band_regions(), false);
        assert_eq!(colors.pixel(0, 0), &[0, 0, 255, 255]);
        assert_eq!(colors.pixel(0, 1), &[0, 0, 255, 255], "threshold is inclusive");
        assert_eq!(colors.pixel(0, 2), &[0, 255, 0, 255]);
        assert_eq!(colors.pixel(0, 3), &[0, 255, 0, 255]);
    }

    #[test]
    fn test_height_encoded_in_alpha() {
        let heights = row(&[0.0, 0.5, 1.0]);
        let colors = compute_color_map(&heights, &two_band_regions(), true);
        assert_eq!(colors.get(0, 0, 3), 0);
        assert_eq!(colors.get(0, 1, 3), 127);
        assert_eq!(colors.get(0, 2, 3), 255);
        assert_eq!(&colors.pixel(0, 2)[..3], &[0, 255, 0]);
    }

    #[test]
    fn test_every_height_resolves_to_a_region() {
        let regions = RegionsSettings::default();
        let values: Vec<f32> = (0..=1000).map(|i| i as f32 / 1000.0).collect();
        let colors = compute_color_map(&row(&values), &regions, false);
        let palette = regions.uint8_colors();
        for j in 0..values.len() {
            let pixel = colors.pixel(0, j);
            assert!(
                palette.iter().any(|c| c.as_slice() == pixel),
                "height {} produced a color outside the palette",
                values[j]
            );
        }
    }
}
