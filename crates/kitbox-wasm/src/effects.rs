//! Filter widget WASM bindings.
//!
//! Settings cross the boundary as a plain JS object via serde, so the
//! widget can spread its slider state straight into the call.

use crate::types::JsRasterImage;
use kitbox_core::raster::{apply_effects, EffectSettings};
use wasm_bindgen::prelude::*;

/// Apply the filter widget's effects and return a new image.
///
/// `settings` is an object with any of `brightness`, `contrast`,
/// `grayscale`, `sepia`, `noise`, `noise_seed`; omitted fields default to
/// off. The input image is left untouched so the widget can re-apply from
/// the original on every slider change.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const filtered = apply_image_effects(image, {
///   brightness: 10,
///   grayscale: 100,
///   noise: 20,
///   noise_seed: 7,
/// });
/// ```
#[wasm_bindgen]
pub fn apply_image_effects(
    image: &JsRasterImage,
    settings: JsValue,
) -> Result<JsRasterImage, JsValue> {
    let settings: EffectSettings =
        serde_wasm_bindgen::from_value(settings).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut raster = image.to_raster();
    apply_effects(&mut raster.pixels, &settings);
    Ok(JsRasterImage::from_raster(raster))
}
