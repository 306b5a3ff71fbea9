//! Procedural SVG generator WASM bindings.
//!
//! Options cross the boundary as plain JS objects via serde; the generators
//! return standalone SVG markup the widget injects or offers for download.

use kitbox_core::svg::{generate_blob, generate_pattern, BlobOptions, PatternOptions};
use wasm_bindgen::prelude::*;

/// Generate a smooth random blob as SVG markup.
///
/// `options` may set `size`, `points`, `randomness`, `seed`, `fill`;
/// omitted fields use the widget defaults.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const svg = blob_svg({ points: 10, seed: Date.now() });
/// container.innerHTML = svg;
/// ```
#[wasm_bindgen]
pub fn blob_svg(options: JsValue) -> Result<String, JsValue> {
    let options: BlobOptions =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    generate_blob(&options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a tiled random pattern as SVG markup.
///
/// `options` may set `size`, `cell`, `seed`, `foreground`, `background`;
/// omitted fields use the widget defaults.
#[wasm_bindgen]
pub fn pattern_svg(options: JsValue) -> Result<String, JsValue> {
    let options: PatternOptions =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    generate_pattern(&options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-specific tests that require JsValue. Run with `wasm-pack test`.
/// The generators are covered in `kitbox_core::svg`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_blob_with_default_options() {
        let svg = blob_svg(js_sys::Object::new().into()).unwrap();
        assert!(svg.starts_with("<svg "));
    }

    #[wasm_bindgen_test]
    fn test_pattern_with_default_options() {
        let svg = pattern_svg(js_sys::Object::new().into()).unwrap();
        assert!(svg.contains("<rect"));
    }
}
