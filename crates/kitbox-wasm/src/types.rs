//! WASM-compatible wrapper types for image data.
//!
//! JavaScript-friendly wrappers around the core Kitbox types, handling the
//! conversion between Rust and JavaScript data representations.

use kitbox_core::raster::{FilterType, RasterImage};
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory; `pixels()` copies it out to a
/// `Uint8Array`. wasm-bindgen's finalizer releases the WASM side
/// automatically, or `free()` can be called to do it eagerly.
#[wasm_bindgen]
pub struct JsRasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    ///
    /// Fails if the buffer length does not match the dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRasterImage, JsValue> {
        RasterImage::new(width, height, pixels)
            .map(Self::from_raster)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// RGB pixel data as a Uint8Array (copies out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory. Optional; the finalizer handles it too.
    pub fn free(self) {}
}

impl JsRasterImage {
    /// Wrap a core RasterImage (no copy).
    pub(crate) fn from_raster(img: RasterImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core RasterImage. Clones the pixel data.
    pub(crate) fn to_raster(&self) -> RasterImage {
        RasterImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Map a u8 filter value from JavaScript to the core enum.
///
/// 0 = Nearest, 1 = Bilinear, 2 = Lanczos3; anything else falls back to
/// Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}
