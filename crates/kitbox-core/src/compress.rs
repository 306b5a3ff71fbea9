//! Target-size image compression for the compressor widget.
//!
//! Finds the highest encoder quality whose output fits a caller-specified
//! byte budget by binary-searching integer quality 1..=100. The encoder is a
//! caller-supplied collaborator; each call performs a real image encode, so
//! the search issues as few calls as possible and runs them strictly
//! sequentially - every iteration's range depends on the previous result.
//!
//! Quality-versus-size is monotonic non-decreasing for standard encoders in
//! practice, which is what justifies the binary search, but it is not
//! guaranteed: the iteration cap bounds encode calls when the curve is noisy.
//! The returned buffer's length is the authoritative size measurement.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::raster::{encode_jpeg, ImageError};

/// Lowest quality the search will try.
pub const MIN_QUALITY: u8 = 1;

/// Highest quality the search will try.
pub const MAX_QUALITY: u8 = 100;

/// Errors that abort a target-size search.
#[derive(Debug, Error)]
pub enum CompressError {
    /// Target byte budget was zero.
    #[error("target size must be at least 1 byte")]
    InvalidTarget,

    /// The encoder collaborator failed. No partial result is returned: any
    /// returned bytes must correspond to one successful, measured encode.
    #[error("encoding failed at quality {quality}: {message}")]
    EncodingFailed { quality: u8, message: String },

    /// The cancellation flag was set before the search finished.
    #[error("compression cancelled")]
    Cancelled,
}

/// Search configuration.
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// Cap on search iterations. The monotonic case needs at most 7 encode
    /// calls for the 1..=100 range; the slack covers noisy encoders.
    pub max_iterations: u32,
    /// Checked before each encode call; a set flag aborts the search with
    /// [`CompressError::Cancelled`].
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_iterations: 15,
            cancel: None,
        }
    }
}

/// Outcome of a target-size search.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedResult {
    /// Encoded output of the selected trial.
    pub bytes: Vec<u8>,
    /// Quality level that produced `bytes`.
    pub quality_used: u8,
    /// Measured length of `bytes`.
    pub achieved_bytes: usize,
    /// False when even the lowest quality overshot the target and the
    /// quality-1 output is returned as a degraded success.
    pub met_target: bool,
}

/// Search for the highest quality whose encoded size fits `target_bytes`.
///
/// `encode` maps a quality level in `MIN_QUALITY..=MAX_QUALITY` to encoded
/// bytes and must be deterministic for a fixed input image. When no quality
/// level fits - quality alone cannot shrink some images below target without
/// changing dimensions - the quality-1 output is returned with
/// `met_target = false` so the caller still gets something usable.
///
/// # Errors
///
/// * [`CompressError::InvalidTarget`] when `target_bytes` is zero
/// * [`CompressError::EncodingFailed`] when `encode` fails; the search aborts
/// * [`CompressError::Cancelled`] when the options' cancel flag is set
pub fn compress_to_target<F, E>(
    mut encode: F,
    target_bytes: usize,
    options: &CompressOptions,
) -> Result<CompressedResult, CompressError>
where
    F: FnMut(u8) -> Result<Vec<u8>, E>,
    E: std::fmt::Display,
{
    if target_bytes == 0 {
        return Err(CompressError::InvalidTarget);
    }

    let mut min_quality = MIN_QUALITY;
    let mut max_quality = MAX_QUALITY;
    let mut best: Option<(u8, Vec<u8>)> = None;
    // Kept so the fallback path can reuse the quality-1 trial instead of
    // encoding it a second time.
    let mut floor_trial: Option<Vec<u8>> = None;

    for _ in 0..options.max_iterations {
        if min_quality > max_quality {
            break;
        }
        check_cancelled(options)?;

        let mid = ((min_quality as u16 + max_quality as u16) / 2) as u8;
        let produced = run_encoder(&mut encode, mid)?;

        if produced.len() <= target_bytes {
            // Fits: remember it, then keep searching upward - the goal is
            // the best quality that still fits.
            best = Some((mid, produced));
            min_quality = mid + 1;
        } else {
            if mid == MIN_QUALITY {
                floor_trial = Some(produced);
            }
            max_quality = mid - 1;
        }
    }

    if let Some((quality, bytes)) = best {
        return Ok(CompressedResult {
            achieved_bytes: bytes.len(),
            bytes,
            quality_used: quality,
            met_target: true,
        });
    }

    let bytes = match floor_trial {
        Some(bytes) => bytes,
        None => {
            check_cancelled(options)?;
            run_encoder(&mut encode, MIN_QUALITY)?
        }
    };
    Ok(CompressedResult {
        met_target: bytes.len() <= target_bytes,
        achieved_bytes: bytes.len(),
        bytes,
        quality_used: MIN_QUALITY,
    })
}

/// Compress RGB pixel data to JPEG, targeting a byte budget.
///
/// Convenience wiring [`compress_to_target`] to the built-in JPEG encoder;
/// this is what the compressor widget calls through wasm.
pub fn compress_jpeg_to_target(
    pixels: &[u8],
    width: u32,
    height: u32,
    target_bytes: usize,
    options: &CompressOptions,
) -> Result<CompressedResult, CompressError> {
    compress_to_target(
        |quality| -> Result<Vec<u8>, ImageError> { encode_jpeg(pixels, width, height, quality) },
        target_bytes,
        options,
    )
}

fn check_cancelled(options: &CompressOptions) -> Result<(), CompressError> {
    match &options.cancel {
        Some(flag) if flag.load(Ordering::Relaxed) => Err(CompressError::Cancelled),
        _ => Ok(()),
    }
}

fn run_encoder<F, E>(encode: &mut F, quality: u8) -> Result<Vec<u8>, CompressError>
where
    F: FnMut(u8) -> Result<Vec<u8>, E>,
    E: std::fmt::Display,
{
    encode(quality).map_err(|e| CompressError::EncodingFailed {
        quality,
        message: e.to_string(),
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
