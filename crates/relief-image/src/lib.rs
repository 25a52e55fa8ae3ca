//! Dense interleaved image buffers shared by the terrain generation pipeline.
//!
//! Height maps are `Image<f32>`, normal and color maps are RGBA `Image<u8>`.
//! Includes normalization helpers and a PNG save hook for debugging output.

mod buffer;
mod normalize;
mod save;

pub use buffer::Image;
pub use normalize::{FLAT_FIELD_VALUE, from_float_to_uint8, normalize, normalize_image};
pub use save::{ImageError, save_image};
