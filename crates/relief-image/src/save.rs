//! PNG export of 8-bit images.

use std::path::Path;

use image::{ColorType, ImageFormat};

use crate::Image;

/// Errors that can occur when writing an image to disk.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// PNG supports 1 to 4 interleaved 8-bit channels.
    #[error("cannot encode a {0}-channel image as PNG")]
    UnsupportedDepth(usize),

    /// Image dimensions do not fit the encoder's 32-bit size fields.
    #[error("image dimensions {0}x{1} are too large to encode")]
    TooLarge(usize, usize),

    /// The encoder or the underlying file write failed.
    #[error("failed to write image: {0}")]
    Encode(#[from] image::ImageError),
}

fn color_type(depth: usize) -> Result<ColorType, ImageError> {
    match depth {
        1 => Ok(ColorType::L8),
        2 => Ok(ColorType::La8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        other => Err(ImageError::UnsupportedDepth(other)),
    }
}

/// Write `image` as an 8-bit PNG, rows top to bottom.
///
/// # Errors
///
/// Returns [`ImageError::UnsupportedDepth`] for images with zero or more than
/// four channels, and [`ImageError::Encode`] if encoding or the write fails.
pub fn save_image(path: impl AsRef<Path>, image: &Image<u8>) -> Result<(), ImageError> {
    let path = path.as_ref();
    let color = color_type(image.depth())?;
    let (width, height) = image.dimensions();
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(ImageError::TooLarge(width, height));
    };

    image::save_buffer_with_format(path, image.data(), w, h, color, ImageFormat::Png)?;
    tracing::debug!(
        "Saved {}x{}x{} image to {}",
        width,
        height,
        image.depth(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_rgba_png_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.png");

        let mut img: Image<u8> = Image::new(3, 2, 4);
        img.set_pixel(0, 0, &[255, 0, 0, 255]);
        img.set_pixel(1, 2, &[0, 0, 255, 128]);
        save_image(&path, &img).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        // (row 1, column 2) is (x = 2, y = 1) in image-crate coordinates.
        assert_eq!(decoded.get_pixel(2, 1).0, [0, 0, 255, 128]);
    }

    #[test]
    fn test_save_grayscale_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("height.png");

        let img = Image::filled(4, 4, 1, 200_u8);
        save_image(&path, &img).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert!(decoded.pixels().all(|p| p.0 == [200]));
    }

    #[test]
    fn test_unsupported_depth_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let img: Image<u8> = Image::new(2, 2, 5);
        let err = save_image(dir.path().join("bad.png"), &img).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedDepth(5)));
    }
}
