//! Target-size compression WASM bindings.
//!
//! The compressor widget hands over the decoded image and a byte budget;
//! the search and every JPEG encode run inside WASM, so the only things
//! crossing the boundary are the inputs and the final bytes.

use crate::types::JsRasterImage;
use kitbox_core::compress::{compress_jpeg_to_target, CompressOptions};
use wasm_bindgen::prelude::*;

/// Result of a target-size compression, exposed to JavaScript.
#[wasm_bindgen]
pub struct JsCompressedResult {
    bytes: Vec<u8>,
    quality_used: u8,
    achieved_bytes: usize,
    met_target: bool,
}

#[wasm_bindgen]
impl JsCompressedResult {
    /// Encoded JPEG bytes as a Uint8Array.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Quality level that produced the output.
    #[wasm_bindgen(getter)]
    pub fn quality_used(&self) -> u8 {
        self.quality_used
    }

    /// Measured output size in bytes.
    #[wasm_bindgen(getter)]
    pub fn achieved_bytes(&self) -> usize {
        self.achieved_bytes
    }

    /// False when even the lowest quality overshot the target and the
    /// output is the smallest achievable instead.
    #[wasm_bindgen(getter)]
    pub fn met_target(&self) -> bool {
        self.met_target
    }
}

/// Compress an image to JPEG, aiming for `target_bytes`.
///
/// Runs the quality binary search against the built-in JPEG encoder. When
/// the target is unreachable at the image's dimensions the quality-1 output
/// comes back with `met_target === false`, so the widget can suggest
/// resizing first.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = compress_image_to_target(image, 200 * 1024);
/// if (!result.met_target) {
///   showHint(`Smallest achievable is ${result.achieved_bytes} bytes`);
/// }
/// downloadBlob(new Blob([result.bytes()], { type: 'image/jpeg' }));
/// ```
#[wasm_bindgen]
pub fn compress_image_to_target(
    image: &JsRasterImage,
    target_bytes: usize,
) -> Result<JsCompressedResult, JsValue> {
    let raster = image.to_raster();
    let result = compress_jpeg_to_target(
        &raster.pixels,
        raster.width,
        raster.height,
        target_bytes,
        &CompressOptions::default(),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(JsCompressedResult {
        bytes: result.bytes,
        quality_used: result.quality_used,
        achieved_bytes: result.achieved_bytes,
        met_target: result.met_target,
    })
}
