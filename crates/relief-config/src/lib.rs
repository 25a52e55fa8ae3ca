//! Configuration for the relief terrain generator.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap. Missing fields fall back to defaults so older
//! files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, CurveConfig, DebugConfig, MapConfig, MeshConfig, MeshMode,
    OutputConfig, default_config_dir,
};
pub use error::ConfigError;
