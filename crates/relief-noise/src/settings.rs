//! Fractal noise parameters and their valid ranges.

use std::ops::RangeInclusive;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::NoiseError;

/// Upper bound on octaves. Matches the size of the per-octave offset arrays
/// consumed by the GPU height-map shader.
pub const MAX_OCTAVES: u32 = 16;

/// Slider range for [`NoiseSettings::lacunarity`].
pub const LACUNARITY_RANGE: RangeInclusive<f32> = 0.01..=10.0;
/// Slider range for [`NoiseSettings::persistence`].
pub const PERSISTENCE_RANGE: RangeInclusive<f32> = 0.01..=1.0;
/// Slider range for [`NoiseSettings::octaves`].
pub const OCTAVES_RANGE: RangeInclusive<u32> = 1..=MAX_OCTAVES;
/// Slider range for [`NoiseSettings::noise_scale`].
pub const NOISE_SCALE_RANGE: RangeInclusive<f32> = 0.01..=50.0;
/// Slider range for [`NoiseSettings::exponent`].
pub const EXPONENT_RANGE: RangeInclusive<f32> = 1.0..=2.0;
/// Slider range for each component of [`NoiseSettings::offset`].
pub const OFFSET_RANGE: RangeInclusive<f32> = -1000.0..=1000.0;

/// 2D gradient-noise primitive summed per octave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseBasis {
    /// Classic Perlin noise.
    #[default]
    Perlin,
    /// Simplex noise (fewer directional artifacts).
    Simplex,
}

/// Configuration for multi-octave fractal Brownian motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Power applied to normalized heights. `1.0` leaves them unchanged;
    /// larger values push midlands down and sharpen peaks.
    pub exponent: f32,
    /// Spatial divisor: the first octave samples noise at `pixel / noise_scale`.
    pub noise_scale: f32,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f32,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub persistence: f32,
    /// Number of noise octaves to composite.
    pub octaves: u32,
    /// Translation of the sampling domain, added to every octave offset.
    pub offset: Vec2,
    /// RNG seed for the per-octave offsets. `-1` asks the caller to reseed
    /// from the wall clock (see [`crate::SeedSource`]).
    pub seed: i64,
    /// Noise primitive.
    pub basis: NoiseBasis,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            exponent: 1.0,
            noise_scale: 3.0,
            lacunarity: 2.0,
            persistence: 0.5,
            octaves: 8,
            offset: Vec2::ZERO,
            seed: 0,
            basis: NoiseBasis::Perlin,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> NoiseError {
    NoiseError::InvalidSettings {
        field,
        reason: reason.into(),
    }
}

impl NoiseSettings {
    /// Check every field against the domain the generator relies on.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidSettings`] naming the first bad field.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if !OCTAVES_RANGE.contains(&self.octaves) {
            return Err(invalid(
                "octaves",
                format!("{} not in 1..={MAX_OCTAVES}", self.octaves),
            ));
        }
        if !(self.noise_scale.is_finite() && self.noise_scale > 0.0) {
            return Err(invalid(
                "noise_scale",
                format!("{} must be positive", self.noise_scale),
            ));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 0.0) {
            return Err(invalid(
                "lacunarity",
                format!("{} must be positive", self.lacunarity),
            ));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(invalid(
                "persistence",
                format!("{} not in (0, 1]", self.persistence),
            ));
        }
        if !(self.exponent.is_finite() && self.exponent >= 1.0) {
            return Err(invalid(
                "exponent",
                format!("{} must be at least 1", self.exponent),
            ));
        }
        if !self.offset.is_finite() {
            return Err(invalid("offset", format!("{} is not finite", self.offset)));
        }
        Ok(())
    }

    /// Project every field into its slider range.
    pub fn clamped(&self) -> Self {
        let clamp = |v: f32, range: &RangeInclusive<f32>| v.clamp(*range.start(), *range.end());
        Self {
            exponent: clamp(self.exponent, &EXPONENT_RANGE),
            noise_scale: clamp(self.noise_scale, &NOISE_SCALE_RANGE),
            lacunarity: clamp(self.lacunarity, &LACUNARITY_RANGE),
            persistence: clamp(self.persistence, &PERSISTENCE_RANGE),
            octaves: self.octaves.clamp(*OCTAVES_RANGE.start(), *OCTAVES_RANGE.end()),
            offset: Vec2::new(
                clamp(self.offset.x, &OFFSET_RANGE),
                clamp(self.offset.y, &OFFSET_RANGE),
            ),
            seed: self.seed,
            basis: self.basis,
        }
    }

    /// Theoretical maximum absolute height before normalization
    /// (geometric series of octave amplitudes).
    pub fn max_amplitude(&self) -> f32 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.persistence;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NoiseSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let settings = NoiseSettings {
            octaves: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(NoiseError::InvalidSettings {
                field: "octaves",
                ..
            })
        ));
    }

    #[test]
    fn test_too_many_octaves_rejected() {
        let settings = NoiseSettings {
            octaves: MAX_OCTAVES + 1,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_noise_scale_rejected() {
        let settings = NoiseSettings {
            noise_scale: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(NoiseError::InvalidSettings {
                field: "noise_scale",
                ..
            })
        ));
    }

    #[test]
    fn test_persistence_above_one_rejected() {
        let settings = NoiseSettings {
            persistence: 1.5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_exponent_below_one_rejected() {
        let settings = NoiseSettings {
            exponent: 0.5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_nan_offset_rejected() {
        let settings = NoiseSettings {
            offset: Vec2::new(f32::NAN, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(NoiseError::InvalidSettings {
                field: "offset",
                ..
            })
        ));
    }

    #[test]
    fn test_clamped_settings_are_valid() {
        let wild = NoiseSettings {
            exponent: 10.0,
            noise_scale: -3.0,
            lacunarity: 100.0,
            persistence: 0.0,
            octaves: 40,
            offset: Vec2::new(5000.0, -5000.0),
            seed: 3,
            basis: NoiseBasis::Simplex,
        };
        let clamped = wild.clamped();
        assert!(clamped.validate().is_ok(), "clamped settings: {clamped:?}");
        assert_eq!(clamped.octaves, MAX_OCTAVES);
        assert_eq!(clamped.offset, Vec2::new(1000.0, -1000.0));
        assert_eq!(clamped.seed, 3);
    }

    #[test]
    fn test_max_amplitude_calculation() {
        let settings = NoiseSettings {
            persistence: 0.5,
            octaves: 4,
            ..Default::default()
        };
        assert!((settings.max_amplitude() - 1.875).abs() < 1e-6);
    }
}
