//! Kitbox Core - tool engines for the Kitbox utility toolbox
//!
//! This crate provides the algorithmic cores behind the Kitbox widgets,
//! leaving all display and input state to the UI layer:
//!
//! - `convert` - the unit converter engine
//! - `compress` - target-size image compression search
//! - `raster` - decode/encode/resize/crop/effects shared by the image tools
//! - `color` - hex/HSL math for the palette tool
//! - `svg` - procedural blob and pattern generators
//!
//! Every operation takes explicit parameters and returns an explicit result
//! value; there is no global or component-lifecycle state anywhere in the
//! crate.

pub mod color;
pub mod compress;
pub mod convert;
pub mod raster;
pub mod svg;

pub use compress::{
    compress_jpeg_to_target, compress_to_target, CompressError, CompressOptions, CompressedResult,
};
pub use convert::{convert, Category, ConvertError, Conversion};
pub use raster::{decode_image, encode_jpeg, RasterImage};
