//! Headless terrain generator.
//!
//! Loads `config.ron` (CLI flags override it), generates the height, normal
//! and color maps, builds the configured mesh and writes the maps as PNGs.
//! Run with `cargo run -p relief-demo -- --width 512 --height 512 --seed 7`.

mod error;
mod mesh;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use relief_config::{CliArgs, Config, default_config_dir};
use relief_math::CubicHermiteCurve;
use relief_noise::{FractalNoiseGenerator, GenerationOptions, SeedSource};
use tracing::{error, info, warn};

use crate::error::DemoError;

/// Build a generator from `config` and fill its maps from `seed`.
fn generate_maps(
    config: &Config,
    curve: &CubicHermiteCurve,
    seed: u64,
) -> Result<FractalNoiseGenerator, DemoError> {
    let mut generator = FractalNoiseGenerator::new(config.map.width, config.map.height)?;
    generator.set_settings(config.noise.clone())?;
    generator.set_regions(config.regions.clone())?;
    generator.set_options(GenerationOptions {
        curve: config.map.apply_curve.then(|| curve.clone()),
        encode_height_in_alpha: config.map.encode_height_in_alpha,
    })?;
    generator.update(&mut SeedSource::Fixed(seed).rng());
    Ok(generator)
}

/// Curve the mesh applies to stored heights. Heights already redistributed
/// by the generator are used as-is.
fn mesh_curve(config: &Config, curve: &CubicHermiteCurve) -> CubicHermiteCurve {
    if config.map.apply_curve {
        CubicHermiteCurve::identity()
    } else {
        curve.clone()
    }
}

fn run(config: &Config) -> Result<(), DemoError> {
    let curve = config.curve.to_curve()?;

    // Log the concrete seed so wall-clock runs can be reproduced.
    let seed = SeedSource::from_setting(config.noise.seed).resolve();
    info!(
        seed,
        width = config.map.width,
        height = config.map.height,
        octaves = config.noise.octaves,
        "Generating terrain maps"
    );

    let start = Instant::now();
    let generator = generate_maps(config, &curve, seed)?;
    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Terrain maps generated"
    );

    let start = Instant::now();
    let height_curve = mesh_curve(config, &curve);
    let summary = mesh::build_mesh(&config.mesh, generator.height_map(), &height_curve)?;
    info!(
        mode = ?summary.mode,
        vertices = summary.vertices,
        primitives = summary.primitives,
        vertex_bytes = summary.vertex_bytes,
        index_bytes = summary.index_bytes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Mesh built"
    );

    let written = output::save_maps(&config.output, generator.maps())?;
    if written.is_empty() {
        warn!("All map outputs are disabled; nothing was written");
    } else {
        info!(
            files = written.len(),
            "Saved maps to {}",
            config.output.directory.display()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    relief_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terrain generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
