//! Writes the generated maps as PNG files.

use std::path::PathBuf;

use relief_config::OutputConfig;
use relief_image::{from_float_to_uint8, save_image};
use relief_noise::TerrainMaps;

use crate::error::DemoError;

pub const HEIGHT_MAP_FILE: &str = "height_map.png";
pub const NORMAL_MAP_FILE: &str = "normal_map.png";
pub const COLOR_MAP_FILE: &str = "color_map.png";

/// Save the maps enabled in `config` and return the written paths.
pub fn save_maps(config: &OutputConfig, maps: &TerrainMaps) -> Result<Vec<PathBuf>, DemoError> {
    let mut written = Vec::new();
    if !(config.save_height_map || config.save_normal_map || config.save_color_map) {
        return Ok(written);
    }
    std::fs::create_dir_all(&config.directory)?;

    if config.save_height_map {
        let path = config.directory.join(HEIGHT_MAP_FILE);
        save_image(&path, &from_float_to_uint8(&maps.height))?;
        written.push(path);
    }
    if config.save_normal_map {
        let path = config.directory.join(NORMAL_MAP_FILE);
        save_image(&path, &maps.normal)?;
        written.push(path);
    }
    if config.save_color_map {
        let path = config.directory.join(COLOR_MAP_FILE);
        save_image(&path, &maps.color)?;
        written.push(path);
    }

    for path in &written {
        tracing::debug!("wrote {}", path.display());
    }
    Ok(written)
}
