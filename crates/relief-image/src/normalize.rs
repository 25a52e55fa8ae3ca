//! Value remapping for floating-point images.

use crate::Image;

/// Value written to every scalar when a flat image is normalized.
pub const FLAT_FIELD_VALUE: f32 = 0.5;

/// Remap every scalar via `(v - min) / (max - min)` in place.
///
/// Multi-channel images are assumed to hold equal values in all channels
/// (grayscale stored as RGB). When `max == min` the range is degenerate and
/// the image is filled with [`FLAT_FIELD_VALUE`] instead of dividing by zero.
pub fn normalize_image(image: &mut Image<f32>, max: f32, min: f32) {
    let range = max - min;
    if range == 0.0 {
        tracing::warn!(
            value = max,
            "flat image cannot be normalized, filling with {FLAT_FIELD_VALUE}"
        );
        image.fill(FLAT_FIELD_VALUE);
        return;
    }
    image.transform(|v| (v - min) / range);
}

/// Normalize using the image's own extrema. Empty images are left untouched.
pub fn normalize(image: &mut Image<f32>) {
    if let (Some(max), Some(min)) = (image.max(), image.min()) {
        normalize_image(image, max, min);
    }
}

/// Convert a `[0, 1]` float image to 8-bit by scaling with 255 and truncating.
///
/// Values outside `[0, 1]` saturate at 0 or 255.
pub fn from_float_to_uint8(image: &Image<f32>) -> Image<u8> {
    let mut converted = Image::new(image.width(), image.height(), image.depth());
    for (dst, &src) in converted.iter_mut().zip(image.iter()) {
        *dst = (255.0 * src) as u8;
    }
    converted
}
