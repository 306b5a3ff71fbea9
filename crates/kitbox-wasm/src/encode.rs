//! Image encoding WASM bindings.
//!
//! Export side of the image widgets: JPEG with a quality setting, PNG for
//! lossless output. Both return the encoded bytes for the download blob.

use crate::types::JsRasterImage;
use kitbox_core::raster;
use wasm_bindgen::prelude::*;

/// Encode an image to JPEG bytes.
///
/// `quality` is 1-100 (values outside the range are clamped).
///
/// # Example (TypeScript)
///
/// ```typescript
/// const jpeg = encode_jpeg(image, 85);
/// downloadBlob(new Blob([jpeg], { type: 'image/jpeg' }));
/// ```
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRasterImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let raster = image.to_raster();
    raster::encode_jpeg(&raster.pixels, raster.width, raster.height, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to PNG bytes (lossless).
#[wasm_bindgen]
pub fn encode_png(image: &JsRasterImage) -> Result<Vec<u8>, JsValue> {
    let raster = image.to_raster();
    raster::encode_png(&raster.pixels, raster.width, raster.height)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    // Functions here return Result<_, JsValue>, which only works on wasm32
    // targets; the underlying encoders are covered in kitbox_core::raster.
}

/// WASM-specific tests that require JsValue. Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_markers() {
        let image = JsRasterImage::new(10, 10, vec![128u8; 10 * 10 * 3]).unwrap();
        let jpeg = encode_jpeg(&image, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[wasm_bindgen_test]
    fn test_encode_png_signature() {
        let image = JsRasterImage::new(10, 10, vec![128u8; 10 * 10 * 3]).unwrap();
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}
