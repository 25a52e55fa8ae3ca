//! Command-line argument parsing for the relief generator.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, MeshMode};

/// Relief command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "relief", about = "Procedural terrain map generator")]
pub struct CliArgs {
    /// Map width in pixels.
    #[arg(long)]
    pub width: Option<usize>,

    /// Map height in pixels.
    #[arg(long)]
    pub height: Option<usize>,

    /// Offset RNG seed (-1 reseeds from the wall clock).
    #[arg(long, allow_hyphen_values = true)]
    pub seed: Option<i64>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Mesh to build.
    #[arg(long, value_enum)]
    pub mesh_mode: Option<MeshMode>,

    /// Patches per side for the patch mesh.
    #[arg(long)]
    pub patch_count: Option<usize>,

    /// Directory the generated PNGs are written to.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.map.width = w;
        }
        if let Some(h) = args.height {
            self.map.height = h;
        }
        if let Some(seed) = args.seed {
            self.noise.seed = seed;
        }
        if let Some(octaves) = args.octaves {
            self.noise.octaves = octaves;
        }
        if let Some(mode) = args.mesh_mode {
            self.mesh.mode = mode;
        }
        if let Some(count) = args.patch_count {
            self.mesh.patch_count = count;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
