//! Image decoding WASM bindings.
//!
//! Entry point for every image widget: the file input's bytes come in, an
//! RGB image handle comes out and stays in WASM memory for the follow-up
//! operations (resize, crop, effects, compression).

use crate::types::JsRasterImage;
use kitbox_core::raster;
use wasm_bindgen::prelude::*;

/// Decode JPEG/PNG/WebP bytes into an image handle.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    raster::decode_image(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
