//! One-shot generation of the height, normal and color maps.
//!
//! Stages always run in the order height → normal → color; each stage reads
//! only the output of the previous one, so the returned maps are consistent.

use glam::Vec2;
use rand::Rng;
use relief_image::Image;
use relief_math::CubicHermiteCurve;

use crate::{
    NoiseError, NoiseSettings, RegionsSettings, compute_color_map, compute_height_map,
    compute_normal_map, generate_random_offsets,
};

/// Generation switches that are not noise parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationOptions {
    /// Redistribute normalized heights through this curve.
    pub curve: Option<CubicHermiteCurve>,
    /// Store `255 * height` in the color map's alpha channel.
    pub encode_height_in_alpha: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            curve: None,
            encode_height_in_alpha: true,
        }
    }
}

impl GenerationOptions {
    /// Check that the redistribution curve, if any, covers `[0, 1]`.
    pub fn validate(&self) -> Result<(), NoiseError> {
        match &self.curve {
            Some(curve) if !curve.covers_unit_interval() => {
                let (start, end) = curve.domain();
                Err(NoiseError::CurveDomain(start, end))
            }
            _ => Ok(()),
        }
    }
}

/// The three co-indexed maps of one generation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMaps {
    /// Normalized heights in `[0, 1]`, one channel.
    pub height: Image<f32>,
    /// RGBA8 tangent-space normals.
    pub normal: Image<u8>,
    /// RGBA8 region colors.
    pub color: Image<u8>,
    /// The per-octave offsets the height map was sampled with.
    pub random_offsets: Vec<Vec2>,
}

impl TerrainMaps {
    /// Blank maps of the given size, as held before the first generation.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            height: Image::grayscale(width, height),
            normal: Image::new(width, height, crate::NORMAL_MAP_DEPTH),
            color: Image::new(width, height, crate::COLOR_MAP_DEPTH),
            random_offsets: Vec::new(),
        }
    }

    /// Returns `(width, height)` shared by all three maps.
    pub fn dimensions(&self) -> (usize, usize) {
        self.height.dimensions()
    }
}

/// Validate inputs, draw fresh octave offsets from `rng`, and build all maps.
///
/// # Errors
///
/// Returns [`NoiseError`] if the map is empty, the settings or regions are
/// invalid, or the curve does not cover `[0, 1]`. Nothing is generated in
/// that case.
pub fn generate<R: Rng>(
    width: usize,
    height: usize,
    settings: &NoiseSettings,
    regions: &RegionsSettings,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<TerrainMaps, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::EmptyMap(width, height));
    }
    settings.validate()?;
    regions.validate()?;
    options.validate()?;

    let random_offsets = generate_random_offsets(settings, rng);
    let height_map = compute_height_map(
        width,
        height,
        settings,
        &random_offsets,
        options.curve.as_ref(),
    );
    let normal = compute_normal_map(&height_map);
    let color = compute_color_map(&height_map, regions, options.encode_height_in_alpha);

    Ok(TerrainMaps {
        height: height_map,
        normal,
        color,
        random_offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeedSource;
    use glam::Vec2;

    fn generate_seeded(settings: &NoiseSettings, seed: u64) -> Result<TerrainMaps, NoiseError> {
        generate(
            32,
            24,
            settings,
            &RegionsSettings::default(),
            &GenerationOptions::default(),
            &mut SeedSource::Fixed(seed).rng(),
        )
    }

    #[test]
    fn test_maps_share_dimensions() {
        let maps = generate_seeded(&NoiseSettings::default(), 1).unwrap();
        assert_eq!(maps.height.dimensions(), (32, 24));
        assert_eq!(maps.normal.dimensions(), (32, 24));
        assert_eq!(maps.color.dimensions(), (32, 24));
        assert_eq!(maps.random_offsets.len(), 8);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let settings = NoiseSettings::default();
        let a = generate_seeded(&settings, 1234).unwrap();
        let b = generate_seeded(&settings, 1234).unwrap();
        assert_eq!(a, b, "fixed seed must reproduce all three maps");
    }

    #[test]
    fn test_color_alpha_encodes_height() {
        let maps = generate_seeded(&NoiseSettings::default(), 3).unwrap();
        for i in 0..24 {
            for j in 0..32 {
                let expected = (255.0 * maps.height.get(i, j, 0)) as u8;
                assert_eq!(maps.color.get(i, j, 3), expected);
            }
        }
    }

    #[test]
    fn test_invalid_settings_fail_before_generation() {
        let settings = NoiseSettings {
            noise_scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            generate_seeded(&settings, 1),
            Err(NoiseError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_empty_map_rejected() {
        let result = generate(
            0,
            10,
            &NoiseSettings::default(),
            &RegionsSettings::default(),
            &GenerationOptions::default(),
            &mut SeedSource::Fixed(0).rng(),
        );
        assert_eq!(result.unwrap_err(), NoiseError::EmptyMap(0, 10));
    }

    #[test]
    fn test_curve_must_cover_unit_interval() {
        let curve = CubicHermiteCurve::new(
            vec![Vec2::ZERO, Vec2::ONE],
            vec![Vec2::ONE, Vec2::ONE],
            vec![0.0, 0.5],
        )
        .unwrap();
        let options = GenerationOptions {
            curve: Some(curve),
            ..Default::default()
        };
        let result = generate(
            4,
            4,
            &NoiseSettings::default(),
            &RegionsSettings::default(),
            &options,
            &mut SeedSource::Fixed(0).rng(),
        );
        assert_eq!(result.unwrap_err(), NoiseError::CurveDomain(0.0, 0.5));
    }

    #[test]
    fn test_terrain_curve_keeps_heights_in_range() {
        let options = GenerationOptions {
            curve: Some(CubicHermiteCurve::terrain_default()),
            ..Default::default()
        };
        let maps = generate(
            32,
            32,
            &NoiseSettings::default(),
            &RegionsSettings::default(),
            &options,
            &mut SeedSource::Fixed(17).rng(),
        )
        .unwrap();
        assert!(maps.height.iter().all(|h| (0.0..=1.0).contains(h)));
    }
}
