//! Decoding uploaded files into RGB pixel data.
//!
//! Browser uploads arrive as raw bytes with no trusted file extension, so the
//! format is sniffed from the content. JPEG, PNG, and WebP are accepted - the
//! formats the image widgets let users pick.

use super::{ImageError, RasterImage};

/// Decode JPEG/PNG/WebP bytes into an RGB raster.
///
/// Any alpha channel is dropped; the widgets work on opaque RGB.
///
/// # Errors
///
/// * [`ImageError::InvalidFormat`] when the bytes are empty or not a
///   recognized image format
/// * [`ImageError::CorruptedFile`] when the format is recognized but the
///   data does not decode
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::InvalidFormat);
    }

    let decoded = image::load_from_memory(bytes).map_err(|e| match e {
        image::ImageError::Unsupported(_) => ImageError::InvalidFormat,
        other => ImageError::CorruptedFile(other.to_string()),
    })?;

    Ok(RasterImage::from_rgb(decoded.to_rgb8()))
}
