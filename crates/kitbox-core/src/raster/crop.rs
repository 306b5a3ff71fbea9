//! Cropping for the crop widget.
//!
//! The crop region is normalized (0.0 to 1.0 in both axes) so the selection
//! the user drags on the preview canvas applies unchanged to the full-size
//! image, whatever its pixel dimensions.

use super::RasterImage;

/// Crop an image using a normalized region.
///
/// * `left`/`top` - top-left corner of the region (0.0 to 1.0)
/// * `width`/`height` - region extent (0.0 to 1.0)
///
/// Coordinates beyond the image are clamped, and the output is never smaller
/// than 1x1. A full region `(0, 0, 1, 1)` returns a copy of the input.
pub fn crop(image: &RasterImage, left: f64, top: f64, width: f64, height: f64) -> RasterImage {
    // Fast path: full crop.
    if left <= 0.0 && top <= 0.0 && width >= 1.0 && height >= 1.0 {
        return image.clone();
    }

    let src_w = image.width as f64;
    let src_h = image.height as f64;

    let px_left = ((left.clamp(0.0, 1.0) * src_w).round() as u32).min(image.width.saturating_sub(1));
    let px_top = ((top.clamp(0.0, 1.0) * src_h).round() as u32).min(image.height.saturating_sub(1));
    let px_width = (width.clamp(0.0, 1.0) * src_w).round() as u32;
    let px_height = (height.clamp(0.0, 1.0) * src_h).round() as u32;

    let px_right = (px_left + px_width).min(image.width);
    let px_bottom = (px_top + px_height).min(image.height);

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let row_bytes = (out_width * 3) as usize;
    let mut output = vec![0u8; (out_width * out_height * 3) as usize];

    for y in 0..out_height {
        let src_start = (((px_top + y) * image.width + px_left) * 3) as usize;
        let dst_start = (y as usize) * row_bytes;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    RasterImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image whose pixel values encode their position.
    fn positional_image(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        RasterImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_full_crop_is_identity() {
        let img = positional_image(50, 50);
        let out = crop(&img, 0.0, 0.0, 1.0, 1.0);
        assert_eq!(out, img);
    }

    #[test]
    fn test_half_crop_dimensions() {
        let img = positional_image(100, 100);
        let out = crop(&img, 0.0, 0.0, 0.5, 0.5);
        assert_eq!((out.width, out.height), (50, 50));
    }

    #[test]
    fn test_center_crop_picks_expected_pixels() {
        let img = positional_image(10, 10);
        let out = crop(&img, 0.2, 0.2, 0.6, 0.6);

        assert_eq!((out.width, out.height), (6, 6));
        // First output pixel comes from (2, 2): value (2 * 10 + 2) % 256.
        assert_eq!(out.pixels[0], 22);
    }

    #[test]
    fn test_region_clamped_to_bounds() {
        let img = positional_image(10, 10);
        let out = crop(&img, 0.8, 0.8, 0.5, 0.5);
        assert!(out.width <= 2);
        assert!(out.height <= 2);
    }

    #[test]
    fn test_negative_coordinates_clamp_to_origin() {
        let img = positional_image(100, 100);
        let out = crop(&img, -0.3, -0.3, 0.5, 0.5);

        assert_eq!((out.width, out.height), (50, 50));
        assert_eq!(out.pixels[0], 0); // pixel from (0, 0)
    }

    #[test]
    fn test_oversized_region_clamps_to_full_image() {
        let img = positional_image(40, 40);
        let out = crop(&img, 0.0, 0.0, 1.5, 1.5);
        assert_eq!((out.width, out.height), (40, 40));
    }

    #[test]
    fn test_tiny_region_yields_at_least_one_pixel() {
        let img = positional_image(100, 100);
        let out = crop(&img, 0.99, 0.99, 0.001, 0.001);
        assert!(out.width >= 1);
        assert!(out.height >= 1);
    }

    #[test]
    fn test_rectangular_strip() {
        let img = positional_image(200, 100);
        let out = crop(&img, 0.0, 0.0, 0.25, 1.0);
        assert_eq!((out.width, out.height), (50, 100));
    }

    #[test]
    fn test_output_buffer_matches_dimensions() {
        let img = positional_image(33, 17);
        let out = crop(&img, 0.1, 0.2, 0.7, 0.6);
        assert_eq!(out.pixels.len(), (out.width * out.height * 3) as usize);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
