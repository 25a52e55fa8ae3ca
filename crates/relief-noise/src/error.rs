//! Noise generation error types.

/// Errors raised when settings are committed or a generation pass starts.
///
/// Validation happens before any per-pixel work, so a returned error means
/// no map was touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// A [`crate::NoiseSettings`] field is outside its valid domain.
    #[error("invalid noise setting `{field}`: {reason}")]
    InvalidSettings {
        field: &'static str,
        reason: String,
    },

    /// The region thresholds do not partition `[0, 1]`.
    #[error("invalid regions: {0}")]
    InvalidRegions(String),

    /// The redistribution curve must be defined on all of `[0, 1]`.
    #[error("redistribution curve domain [{0}, {1}] does not cover [0, 1]")]
    CurveDomain(f32, f32),

    /// Maps need at least one pixel.
    #[error("cannot generate a {0}x{1} map")]
    EmptyMap(usize, usize),
}
