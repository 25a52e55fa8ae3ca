//! Multi-octave fractal Brownian motion (fBm) height maps.
//!
//! Composites octaves of 2D gradient noise, each shifted by its own random
//! offset, then normalizes the field into `[0, 1]`.

use glam::{DVec2, Vec2};
use noise::{NoiseFn, Perlin, Simplex};
use relief_image::{Image, normalize_image};
use relief_math::CubicHermiteCurve;

use crate::{NoiseBasis, NoiseSettings};

/// Permutation seed of the gradient noise. Terrain variety comes from the
/// per-octave offsets, so the lattice itself stays fixed.
const LATTICE_SEED: u32 = 0;

enum BasisNoise {
    Perlin(Perlin),
    Simplex(Simplex),
}

impl BasisNoise {
    fn new(basis: NoiseBasis) -> Self {
        match basis {
            NoiseBasis::Perlin => Self::Perlin(Perlin::new(LATTICE_SEED)),
            NoiseBasis::Simplex => Self::Simplex(Simplex::new(LATTICE_SEED)),
        }
    }

    #[inline]
    fn get(&self, point: DVec2) -> f64 {
        match self {
            Self::Perlin(noise) => noise.get([point.x, point.y]),
            Self::Simplex(noise) => noise.get([point.x, point.y]),
        }
    }
}

/// Samples raw (unnormalized) fBm for one set of octave offsets.
pub struct HeightmapSampler<'a> {
    noise: BasisNoise,
    settings: &'a NoiseSettings,
    offsets: &'a [Vec2],
}

impl<'a> HeightmapSampler<'a> {
    /// # Panics
    ///
    /// Panics if `offsets.len()` differs from `settings.octaves`.
    pub fn new(settings: &'a NoiseSettings, offsets: &'a [Vec2]) -> Self {
        assert_eq!(
            offsets.len(),
            settings.octaves as usize,
            "one random offset per octave is required"
        );
        Self {
            noise: BasisNoise::new(settings.basis),
            settings,
            offsets,
        }
    }

    /// Sum of all octaves at `point`, a pixel position relative to the map
    /// center. The theoretical range is `±settings.max_amplitude()`.
    pub fn sample(&self, point: DVec2) -> f64 {
        let mut total = 0.0;
        let mut frequency = 1.0_f64;
        let mut amplitude = 1.0_f64;
        let scale = f64::from(self.settings.noise_scale);

        for offset in self.offsets {
            let sample_point = (frequency / scale) * point + offset.as_dvec2();
            total += amplitude * self.noise.get(sample_point);

            frequency *= f64::from(self.settings.lacunarity);
            amplitude *= f64::from(self.settings.persistence);
        }

        total
    }
}

/// Build a normalized `width × height` height map.
///
/// After normalization, heights are raised to `settings.exponent` and, when
/// `curve` is given, redistributed through `curve.evaluate(h).y`. Settings are
/// expected to be validated and the curve to cover `[0, 1]`.
pub fn compute_height_map(
    width: usize,
    height: usize,
    settings: &NoiseSettings,
    offsets: &[Vec2],
    curve: Option<&CubicHermiteCurve>,
) -> Image<f32> {
    let sampler = HeightmapSampler::new(settings, offsets);
    let mut map = Image::grayscale(width, height);

    let half_width = width as f64 / 2.0;
    let half_height = height as f64 / 2.0;
    let mut min_height = f32::MAX;
    let mut max_height = f32::MIN;

    for i in 0..height {
        for j in 0..width {
            let point = DVec2::new(j as f64 - half_width, i as f64 - half_height);
            let value = sampler.sample(point) as f32;
            map.set(i, j, 0, value);
            max_height = max_height.max(value);
            min_height = min_height.min(value);
        }
    }

    if map.is_empty() {
        return map;
    }
    normalize_image(&mut map, max_height, min_height);

    if settings.exponent != 1.0 {
        let exponent = settings.exponent;
        map.transform(|h| h.powf(exponent));
    }
    if let Some(curve) = curve {
        map.transform(|h| curve.evaluate(h).y);
    }

    tracing::debug!(
        width,
        height,
        octaves = settings.octaves,
        min = min_height,
        max = max_height,
        "height map generated"
    );
    map
}
