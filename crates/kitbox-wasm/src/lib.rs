//! Kitbox WASM - WebAssembly bindings for the Kitbox tool engines
//!
//! This crate exposes the kitbox-core functionality to the JavaScript widget
//! layer. Each widget family gets one binding module:
//!
//! - `convert` - unit converter engine
//! - `compress` - target-size JPEG compression
//! - `decode` / `encode` - image import and export
//! - `transform` - resize and crop
//! - `effects` - filter widget pixel effects
//! - `color` - palette tool color math
//! - `svg` - procedural blob and pattern generators
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, convert_units } from '@kitbox/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const result = convert_units(1.0, "meters", "kilometers");
//! console.log(result.formatted); // "0.001"
//! ```

use wasm_bindgen::prelude::*;

mod color;
mod compress;
mod convert;
mod decode;
mod effects;
mod encode;
mod svg;
mod transform;
mod types;

// Re-export public types
pub use color::{complementary_hex, hex_to_hsl, hsl_to_hex, palette_shades, palette_tints};
pub use compress::{compress_image_to_target, JsCompressedResult};
pub use convert::{conversion_categories, convert_units, units_for_category};
pub use decode::decode_image;
pub use effects::apply_image_effects;
pub use encode::{encode_jpeg, encode_png};
pub use svg::{blob_svg, pattern_svg};
pub use transform::{crop, fit_dimensions, resize, resize_to_fit};
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
