//! Core types shared by the image widgets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for the decode/encode/transform operations.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The bytes are not a recognized image format.
    #[error("invalid or unsupported image format")]
    InvalidFormat,

    /// The file decoded partially or not at all.
    #[error("corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Width or height is zero.
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions.
    #[error("invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The underlying codec reported an error.
    #[error("encoding failed: {0}")]
    EncodingFailed(String),
}

/// Interpolation filter for resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Nearest neighbor (fastest, lowest quality).
    Nearest,
    /// Bilinear (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Map to the image crate's filter.
    pub(crate) fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// An image held as raw RGB bytes, the form the widgets pass around.
///
/// The pixel buffer is row-major, 3 bytes per pixel, and its length always
/// equals `width * height * 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGB pixel data.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a raster from raw RGB bytes, validating the buffer length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
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
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an `image::RgbImage` without copying.
    pub fn from_rgb(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbImage` for codec operations.
    pub fn to_rgb(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }
}
