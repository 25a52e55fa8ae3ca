use relief_config::ConfigError;
use relief_image::ImageError;
use relief_math::CurveError;
use relief_mesh::MeshError;
use relief_noise::NoiseError;

/// Anything that can stop a generation run.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid height curve: {0}")]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Noise(#[from] NoiseError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("failed to save map: {0}")]
    Image(#[from] ImageError),

    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
}
