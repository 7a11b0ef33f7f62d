//! Pixel extraction with transparency masking
//!
//! Decodes an image with its alpha channel preserved and flattens it into a
//! list of color samples. A pixel is included iff the image has no alpha
//! channel, or its alpha value is strictly greater than zero; the alpha value
//! itself is never part of a sample.
//!
//! Only 8-bit RGB and RGBA layouts are handled. Anything else (grayscale,
//! 16-bit depths) fails fast instead of being silently reinterpreted.

use std::path::Path;

use image::DynamicImage;
use palette::Srgb;

use crate::error::{AnalysisError, Result};

/// A single included pixel color, 8-bit channels in the decoder's native
/// RGB order
pub type PixelSample = Srgb<u8>;

/// Decode the image at `path`, keeping any transparency channel.
///
/// # Errors
///
/// Returns `AnalysisError::ImageRead` if the file cannot be opened or its
/// contents cannot be decoded.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path)
        .map_err(|e| AnalysisError::image_read(format!("failed to decode {}", path.display()), e))
}

/// Flatten an image into its included pixel samples.
///
/// # Errors
///
/// Returns `AnalysisError::Processing` for channel layouts other than 8-bit
/// RGB/RGBA.
pub fn extract_samples(image: &DynamicImage) -> Result<Vec<PixelSample>> {
    match image {
        DynamicImage::ImageRgb8(pixels) => Ok(pixels
            .pixels()
            .map(|pixel| Srgb::new(pixel[0], pixel[1], pixel[2]))
            .collect()),
        DynamicImage::ImageRgba8(pixels) => Ok(pixels
            .pixels()
            .filter(|pixel| pixel[3] > 0)
            .map(|pixel| Srgb::new(pixel[0], pixel[1], pixel[2]))
            .collect()),
        other => Err(unsupported_layout(other)),
    }
}

/// Count the pixels that [`extract_samples`] would include.
///
/// Used by the folder aggregator to re-derive each image's weighting
/// denominator independently of the per-image percentages.
pub fn included_pixel_count(image: &DynamicImage) -> Result<usize> {
    match image {
        DynamicImage::ImageRgb8(pixels) => {
            let (width, height) = pixels.dimensions();
            Ok(width as usize * height as usize)
        }
        DynamicImage::ImageRgba8(pixels) => {
            Ok(pixels.pixels().filter(|pixel| pixel[3] > 0).count())
        }
        other => Err(unsupported_layout(other)),
    }
}

fn unsupported_layout(image: &DynamicImage) -> AnalysisError {
    AnalysisError::processing(format!(
        "unsupported channel layout {:?}: expected 8-bit RGB or RGBA",
        image.color()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_extract_samples_rgb_includes_all_pixels() {
        let img = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let samples = extract_samples(&DynamicImage::ImageRgb8(img)).unwrap();

        assert_eq!(samples.len(), 6);
        assert!(samples.iter().all(|s| *s == Srgb::new(10u8, 20, 30)));
    }

    #[test]
    fn test_extract_samples_masks_zero_alpha() {
        let img = RgbaImage::from_fn(2, 2, |x, y| {
            if (x, y) == (0, 0) {
                Rgba([255, 0, 0, 0])
            } else {
                Rgba([0, 0, 255, 128])
            }
        });
        let samples = extract_samples(&DynamicImage::ImageRgba8(img)).unwrap();

        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| *s == Srgb::new(0u8, 0, 255)));
    }

    #[test]
    fn test_extract_samples_includes_barely_visible_pixels() {
        // inclusion is alpha > 0, not alpha >= some visibility cutoff
        let img = RgbaImage::from_pixel(2, 1, Rgba([7, 8, 9, 1]));
        let samples = extract_samples(&DynamicImage::ImageRgba8(img)).unwrap();

        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_extract_samples_rejects_grayscale() {
        let img = GrayImage::from_pixel(2, 2, Luma([128]));
        let err = extract_samples(&DynamicImage::ImageLuma8(img)).unwrap_err();

        match err {
            AnalysisError::Processing { message } => {
                assert!(message.contains("unsupported channel layout"));
            }
            other => panic!("expected Processing, got: {:?}", other),
        }
    }

    #[test]
    fn test_included_pixel_count_rgb() {
        let img = RgbImage::new(4, 3);
        let count = included_pixel_count(&DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(count, 12);
    }

    #[test]
    fn test_included_pixel_count_rgba_masked() {
        let img = RgbaImage::from_fn(4, 1, |x, _| {
            if x < 3 {
                Rgba([1, 2, 3, 200])
            } else {
                Rgba([1, 2, 3, 0])
            }
        });
        let count = included_pixel_count(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_count_matches_extracted_samples() {
        let img = RgbaImage::from_fn(5, 5, |x, y| Rgba([50, 60, 70, ((x + y) % 2) as u8 * 255]));
        let dynamic = DynamicImage::ImageRgba8(img);

        let samples = extract_samples(&dynamic).unwrap();
        let count = included_pixel_count(&dynamic).unwrap();
        assert_eq!(samples.len(), count);
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("no_such_image.png")).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageRead { .. }));
    }
}
