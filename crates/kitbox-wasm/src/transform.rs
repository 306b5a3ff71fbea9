//! Resize and crop WASM bindings.
//!
//! The resize widget's two modes (exact dimensions, longest edge) and the
//! crop widget's normalized selection all map to one core call each.

use crate::types::{filter_from_u8, JsRasterImage};
use kitbox_core::raster;
use wasm_bindgen::prelude::*;

/// Resize an image to exact dimensions.
///
/// `filter` selects the resampling filter: 0 = Nearest, 1 = Bilinear,
/// 2 = Lanczos3.
#[wasm_bindgen]
pub fn resize(
    image: &JsRasterImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    raster::resize(&image.to_raster(), width, height, filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize so the longest edge equals `max_edge`, preserving aspect ratio.
/// Images already within the bound come back unchanged.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsRasterImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsRasterImage, JsValue> {
    raster::resize_to_fit(&image.to_raster(), max_edge, filter_from_u8(filter))
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Output dimensions `resize_to_fit` would produce, as `[width, height]`.
///
/// Lets the widget preview the output size without resampling.
#[wasm_bindgen]
pub fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> Vec<u32> {
    let (w, h) = raster::fit_dimensions(width, height, max_edge);
    vec![w, h]
}

/// Crop an image using a normalized region: `left`/`top`/`width`/`height`
/// are all 0.0 to 1.0 relative to the image, matching the selection
/// rectangle the widget draws over its preview.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Crop the center 50% of the image
/// const cropped = crop(image, 0.25, 0.25, 0.5, 0.5);
/// ```
#[wasm_bindgen]
pub fn crop(
    image: &JsRasterImage,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
) -> JsRasterImage {
    JsRasterImage::from_raster(raster::crop(&image.to_raster(), left, top, width, height))
}
