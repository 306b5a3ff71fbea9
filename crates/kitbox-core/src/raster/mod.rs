//! Raster plumbing shared by the image widgets.
//!
//! This module provides:
//! - Decoding uploaded JPEG/PNG/WebP bytes into RGB pixel data
//! - JPEG (quality-parameterized) and PNG export encoders
//! - Resize, crop, and the filter widget's pixel effects
//!
//! # Architecture
//!
//! Everything here is synchronous and allocation-per-call; the widgets run
//! these operations inside Web Workers via the WASM bindings, so no
//! operation holds state between calls.

mod crop;
mod decode;
mod effects;
mod encode;
mod resize;
mod types;

pub use crop::crop;
pub use decode::decode_image;
pub use effects::{apply_effects, EffectSettings};
pub use encode::{encode_jpeg, encode_png};
pub use resize::{fit_dimensions, resize, resize_to_fit};
pub use types::{FilterType, ImageError, RasterImage};
