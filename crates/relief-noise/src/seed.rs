//! Seed sources and per-octave random offsets.
//!
//! Generation only ever draws from an injected `rand::Rng`; picking where the
//! seed comes from (a fixed value or the wall clock) is the caller's choice.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::NoiseSettings;

/// Half-width of the uniform distribution each octave offset is drawn from.
pub const OFFSET_SPREAD: f32 = 10_000.0;

/// Setting value that requests a wall-clock seed.
pub const WALL_CLOCK_SEED: i64 = -1;

/// Where the offset RNG gets its seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Reproducible generation from a fixed seed.
    Fixed(u64),
    /// Different terrain on every run.
    WallClock,
}

impl SeedSource {
    /// Interpret a [`NoiseSettings::seed`] value: `-1` means wall clock, any
    /// other value is used as-is (reinterpreted as `u64`).
    pub fn from_setting(seed: i64) -> Self {
        if seed == WALL_CLOCK_SEED {
            Self::WallClock
        } else {
            Self::Fixed(seed as u64)
        }
    }

    /// Resolve to a concrete seed value.
    pub fn resolve(self) -> u64 {
        match self {
            Self::Fixed(seed) => seed,
            Self::WallClock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default(),
        }
    }

    /// Build a deterministic RNG from the resolved seed.
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.resolve())
    }
}

/// Draw one sampling offset per octave: `settings.offset` plus a uniform
/// sample in `[-OFFSET_SPREAD, OFFSET_SPREAD)²`, x then y.
///
/// Offsets are not scaled by the octave frequency.
pub fn generate_random_offsets<R: Rng>(settings: &NoiseSettings, rng: &mut R) -> Vec<Vec2> {
    (0..settings.octaves)
        .map(|_| {
            let x = rng.random_range(-OFFSET_SPREAD..OFFSET_SPREAD);
            let y = rng.random_range(-OFFSET_SPREAD..OFFSET_SPREAD);
            settings.offset + Vec2::new(x, y)
        })
        .collect()
}
