//! Resizing for the image-resize widget.
//!
//! Exact resize for when the user types both dimensions, and an
//! aspect-preserving fit for the "longest edge" mode. Both return new
//! rasters and leave the input untouched.

use super::{FilterType, ImageError, RasterImage};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimensions`] when either target dimension is
/// zero, and [`ImageError::CorruptedFile`] when the pixel buffer cannot be
/// re-wrapped for the resampler.
pub fn resize(
    image: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RasterImage, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions { width, height });
    }

    // Fast path: nothing to do.
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb = image
        .to_rgb()
        .ok_or_else(|| ImageError::CorruptedFile("pixel buffer length mismatch".to_string()))?;
    let resized = image::imageops::resize(&rgb, width, height, filter.to_image_filter());

    Ok(RasterImage::from_rgb(resized))
}

/// Resize so the longest edge equals `max_edge`, preserving aspect ratio.
///
/// Images already within the bound are returned unchanged - the widget never
/// upscales in this mode.
pub fn resize_to_fit(
    image: &RasterImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<RasterImage, ImageError> {
    if max_edge == 0 {
        return Err(ImageError::InvalidDimensions {
            width: max_edge,
            height: max_edge,
        });
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (width, height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, width, height, filter)
}

/// Dimensions that fit within `max_edge` while preserving aspect ratio.
///
/// Exposed so the widget can preview the output size before resampling.
pub fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;
    if width >= height {
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
