//! Palette tool WASM bindings.
//!
//! Everything speaks hex strings at the boundary - that is what the widget
//! renders and copies to the clipboard - with one structured escape hatch
//! for the HSL readout.

use kitbox_core::color::{shades, tints, Hsl, Rgb};
use wasm_bindgen::prelude::*;

/// Parse a hex color and return its HSL readout as `{ h, s, l }`.
#[wasm_bindgen]
pub fn hex_to_hsl(hex: &str) -> Result<JsValue, JsValue> {
    let rgb = Rgb::parse_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&rgb.to_hsl()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Format an HSL color as a lowercase `#rrggbb` string.
#[wasm_bindgen]
pub fn hsl_to_hex(h: f32, s: f32, l: f32) -> String {
    Hsl::new(h, s, l).to_rgb().to_hex()
}

/// Hex of the color opposite on the hue wheel.
#[wasm_bindgen]
pub fn complementary_hex(hex: &str) -> Result<String, JsValue> {
    let rgb = Rgb::parse_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(rgb.complementary().to_hex())
}

/// Progressively darker variants of a color as hex strings, original first.
#[wasm_bindgen]
pub fn palette_shades(hex: &str, count: usize) -> Result<Vec<String>, JsValue> {
    let rgb = Rgb::parse_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(shades(rgb, count).into_iter().map(Rgb::to_hex).collect())
}

/// Progressively lighter variants of a color as hex strings, original first.
#[wasm_bindgen]
pub fn palette_tints(hex: &str, count: usize) -> Result<Vec<String>, JsValue> {
    let rgb = Rgb::parse_hex(hex).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(tints(rgb, count).into_iter().map(Rgb::to_hex).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
        assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
    }
}
