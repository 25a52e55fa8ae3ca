//! Fractal-noise terrain maps: fBm height maps, Sobel normal maps and region color maps.

mod color_map;
mod error;
mod generator;
mod heightmap;
mod normal_map;
mod pipeline;
mod regions;
mod seed;
mod settings;

pub use color_map::{COLOR_MAP_DEPTH, compute_color_map};
pub use error::NoiseError;
pub use generator::FractalNoiseGenerator;
pub use heightmap::{HeightmapSampler, compute_height_map};
pub use normal_map::{NORMAL_MAP_DEPTH, NORMAL_Z, compute_normal_map, sobel_normal};
pub use pipeline::{GenerationOptions, TerrainMaps, generate};
pub use regions::{Region, RegionsSettings, TOP_OF_RANGE};
pub use seed::{OFFSET_SPREAD, SeedSource, WALL_CLOCK_SEED, generate_random_offsets};
pub use settings::{
    EXPONENT_RANGE, LACUNARITY_RANGE, MAX_OCTAVES, NOISE_SCALE_RANGE, NoiseBasis, NoiseSettings,
    OCTAVES_RANGE, OFFSET_RANGE, PERSISTENCE_RANGE,
};
