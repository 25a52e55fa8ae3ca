//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use glam::Vec2;
use relief_math::{CubicHermiteCurve, CurveError};
use relief_noise::{NoiseSettings, RegionsSettings};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const APP_NAME: &str = "relief";

/// Platform config directory for the generator, e.g. `~/.config/relief` on Linux.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map size and pipeline switches.
    pub map: MapConfig,
    /// Fractal noise parameters.
    pub noise: NoiseSettings,
    /// Height bands used for the color map.
    pub regions: RegionsSettings,
    /// Height redistribution curve.
    pub curve: CurveConfig,
    /// Mesh output settings.
    pub mesh: MeshConfig,
    /// Where and what to write.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Map size and pipeline switches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Map width in pixels.
    pub width: usize,
    /// Map height in pixels.
    pub height: usize,
    /// Redistribute normalized heights through [`Config::curve`] in the height map.
    pub apply_curve: bool,
    /// Store the height in the color map's alpha channel.
    pub encode_height_in_alpha: bool,
}

/// Control points of a cubic Hermite curve as plain arrays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurveConfig {
    pub points: Vec<[f32; 2]>,
    pub tangents: Vec<[f32; 2]>,
    pub ranges: Vec<f32>,
}

/// Which mesh to build from the maps.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
pub enum MeshMode {
    /// Indexed grid displaced on the CPU.
    #[default]
    Grid,
    /// Flat quad patches for GPU tessellation.
    Patch,
}

/// Mesh output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    pub mode: MeshMode,
    /// Grid mesh vertices along x; `None` uses the map width. Must not
    /// exceed the map width.
    pub grid_width: Option<usize>,
    /// Grid mesh vertices along z; `None` uses the map height. Must not
    /// exceed the map height.
    pub grid_height: Option<usize>,
    /// Patches per side in [`MeshMode::Patch`].
    pub patch_count: usize,
    /// World-space height of a fully raised grid vertex.
    pub vertical_scale: f32,
}

/// Output files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory PNGs are written to. Created if missing.
    pub directory: PathBuf,
    pub save_height_map: bool,
    pub save_normal_map: bool,
    pub save_color_map: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            apply_curve: false,
            encode_height_in_alpha: true,
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        let curve = CubicHermiteCurve::terrain_default();
        Self::from_curve(&curve)
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            mode: MeshMode::Grid,
            grid_width: None,
            grid_height: None,
            patch_count: 32,
            vertical_scale: 15.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            save_height_map: true,
            save_normal_map: true,
            save_color_map: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl MeshConfig {
    /// Grid dimensions for a `map_width × map_height` height map.
    pub fn grid_size(&self, map_width: usize, map_height: usize) -> (usize, usize) {
        (
            self.grid_width.unwrap_or(map_width),
            self.grid_height.unwrap_or(map_height),
        )
    }
}

impl CurveConfig {
    pub fn from_curve(curve: &CubicHermiteCurve) -> Self {
        Self {
            points: curve.points().iter().map(|p| p.to_array()).collect(),
            tangents: curve.tangents().iter().map(|t| t.to_array()).collect(),
            ranges: curve.ranges().to_vec(),
        }
    }

    /// Build the curve, validating lengths and range ordering.
    pub fn to_curve(&self) -> Result<CubicHermiteCurve, CurveError> {
        CubicHermiteCurve::new(
            self.points.iter().copied().map(Vec2::from).collect(),
            self.tangents.iter().copied().map(Vec2::from).collect(),
            self.ranges.clone(),
        )
    }
}

// --- Load / Save / Reload ---

fn read_config(config_path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })
    }

    /// Re-read the file: returns `Some(new_config)` if it changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
