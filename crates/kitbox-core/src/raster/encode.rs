//! Export encoders for the image widgets.
//!
//! JPEG takes a quality setting and is what the target-size compressor
//! drives; PNG is lossless and backs the resize tool's default export.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::ImageError;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality, clamped to 1-100 (100 is highest)
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] or
/// [`ImageError::InvalidPixelData`] when the input is inconsistent, and
/// [`ImageError::EncodingFailed`] when the codec itself fails.
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, ImageError> {
    validate_buffer(pixels, width, height)?;

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ImageError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode RGB pixel data to PNG bytes. Lossless, no quality parameter.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    validate_buffer(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ImageError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn validate_buffer(pixels: &[u8], width: u32, height: u32) -> Result<(), ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions { width, height });
    }
    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(ImageError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_produces_jpeg_markers() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg = encode_jpeg(&pixels, 100, 100, 90).unwrap();

        // SOI marker at the start, EOI marker at the end.
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_quality_is_clamped() {
        let pixels = vec![128u8; 10 * 10 * 3];
        assert!(encode_jpeg(&pixels, 10, 10, 0).is_ok());
        assert!(encode_jpeg(&pixels, 10, 10, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        // A gradient so the quality difference is visible in the output.
        let width = 64usize;
        let height = 64usize;
        let mut pixels = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(((x + y) * 127 / (width + height)) as u8);
            }
        }

        let low = encode_jpeg(&pixels, 64, 64, 10).unwrap();
        let high = encode_jpeg(&pixels, 64, 64, 95).unwrap();
        assert!(high.len() > low.len());
    }

    #[test]
    fn test_encode_jpeg_rejects_mismatched_buffer() {
        let pixels = vec![128u8; 99 * 100 * 3];
        assert!(matches!(
            encode_jpeg(&pixels, 100, 100, 90).unwrap_err(),
            ImageError::InvalidPixelData { .. }
        ));
    }

    #[test]
    fn test_encode_jpeg_rejects_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 100, 90).unwrap_err(),
            ImageError::InvalidDimensions { .. }
        ));
        assert!(matches!(
            encode_jpeg(&[], 100, 0, 90).unwrap_err(),
            ImageError::InvalidDimensions { .. }
        ));
    }

    #[test]
    fn test_encode_png_produces_png_signature() {
        let pixels = vec![200u8; 20 * 20 * 3];
        let png = encode_png(&pixels, 20, 20).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_png_rejects_mismatched_buffer() {
        let pixels = vec![0u8; 5];
        assert!(matches!(
            encode_png(&pixels, 10, 10).unwrap_err(),
            ImageError::InvalidPixelData { .. }
        ));
    }

    #[test]
    fn test_single_pixel_images_encode() {
        let pixels = vec![255, 0, 0];
        assert!(encode_jpeg(&pixels, 1, 1, 90).is_ok());
        assert!(encode_png(&pixels, 1, 1).is_ok());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    proptest! {
        /// Property: valid input always produces a parseable JPEG.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
        ) {
            let pixels = vec![128u8; (width * height * 3) as usize];
            let jpeg = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }

        /// Property: encoding is deterministic.
        #[test]
        fn prop_encoding_is_deterministic(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
        ) {
            let pixels: Vec<u8> = (0..(width * height * 3) as usize)
                .map(|i| (i * 31 % 256) as u8)
                .collect();

            let first = encode_jpeg(&pixels, width, height, quality).unwrap();
            let second = encode_jpeg(&pixels, width, height, quality).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: a wrong-length buffer is always rejected, for both codecs.
        #[test]
        fn prop_mismatched_buffer_rejected(
            (width, height) in dimensions_strategy(),
            delta in prop_oneof![Just(-1i64), Just(1i64), Just(7i64)],
        ) {
            let expected = (width * height * 3) as i64;
            let actual = (expected + delta).max(0) as usize;
            prop_assume!(actual as i64 != expected);

            let pixels = vec![0u8; actual];
            let jpeg_is_invalid_pixel_data = matches!(
                encode_jpeg(&pixels, width, height, 80).unwrap_err(),
                ImageError::InvalidPixelData { .. }
            );
            prop_assert!(jpeg_is_invalid_pixel_data);
            let png_is_invalid_pixel_data = matches!(
                encode_png(&pixels, width, height).unwrap_err(),
                ImageError::InvalidPixelData { .. }
            );
            prop_assert!(png_is_invalid_pixel_data);
        }
    }
}
