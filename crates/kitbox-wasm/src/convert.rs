//! Unit converter WASM bindings.
//!
//! The converter widget calls `convert_units` on every input change and
//! renders either the formatted result or the error message inline; both
//! arrive as plain values, no exception handling needed on the JS side.

use kitbox_core::convert::{convert, units_in, Category};
use wasm_bindgen::prelude::*;

/// Convert a value between two named units.
///
/// Returns `{ value, formatted, category }` on success. Unknown units,
/// mismatched categories, and non-finite values reject with the error
/// message as a string.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = convert_units(1.0, "meters", "kilometers");
/// console.log(result.formatted); // "0.001"
/// ```
#[wasm_bindgen]
pub fn convert_units(value: f64, from_unit: &str, to_unit: &str) -> Result<JsValue, JsValue> {
    let conversion =
        convert(value, from_unit, to_unit).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&conversion).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Category names for the widget's category select, in display order.
#[wasm_bindgen]
pub fn conversion_categories() -> Vec<String> {
    Category::all().iter().map(|c| c.name().to_string()).collect()
}

/// Unit names for one category, in display order.
///
/// Fails when the category name is unknown.
#[wasm_bindgen]
pub fn units_for_category(category: &str) -> Result<Vec<String>, JsValue> {
    let category = Category::from_name(category)
        .ok_or_else(|| JsValue::from_str(&format!("unknown category: {category}")))?;
    Ok(units_in(category).iter().map(|u| u.to_string()).collect())
}


/// WASM-specific tests that require JsValue. Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_convert_units_ok() {
        assert!(convert_units(1.0, "meters", "kilometers").is_ok());
    }

    #[wasm_bindgen_test]
    fn test_convert_units_cross_category_rejected() {
        assert!(convert_units(1.0, "meters", "kilograms").is_err());
    }

    #[wasm_bindgen_test]
    fn test_units_for_category() {
        let units = units_for_category("length").unwrap();
        assert!(units.contains(&"meters".to_string()));
        assert!(units_for_category("sound").is_err());
    }
}
