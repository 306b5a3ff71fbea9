//! Pixel compositing for the filter widget.
//!
//! Effects apply per pixel in a fixed order: brightness, contrast, grayscale,
//! sepia, noise. Channels are normalized to 0.0..1.0 for the arithmetic and
//! clamped back to 8-bit at the end. The noise generator is seeded from the
//! settings, so a fixed seed reproduces the exact frame the preview showed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Settings for the filter widget. All values at their defaults are a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Additive brightness shift (-100 to 100); -100 is black, 100 is white.
    pub brightness: f32,
    /// Contrast around the midpoint (-100 to 100).
    pub contrast: f32,
    /// Blend toward BT.709 luminance (0 to 100).
    pub grayscale: f32,
    /// Blend toward the sepia matrix (0 to 100).
    pub sepia: f32,
    /// Uniform speckle amplitude (0 to 100).
    pub noise: f32,
    /// Seed for the noise generator.
    pub noise_seed: u64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 0.0,
            grayscale: 0.0,
            sepia: 0.0,
            noise: 0.0,
            noise_seed: 0,
        }
    }
}

impl EffectSettings {
    /// Create settings with every effect off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether applying these settings would change anything.
    pub fn is_noop(&self) -> bool {
        self.brightness == 0.0
            && self.contrast == 0.0
            && self.grayscale == 0.0
            && self.sepia == 0.0
            && self.noise == 0.0
    }
}

/// Apply the configured effects to RGB pixel data in place.
///
/// `pixels` is 3 bytes per pixel, row-major; a trailing partial pixel is left
/// untouched.
pub fn apply_effects(pixels: &mut [u8], settings: &EffectSettings) {
    if settings.is_noop() {
        return;
    }

    let mut rng = SmallRng::seed_from_u64(settings.noise_seed);
    let noise_amplitude = settings.noise.clamp(0.0, 100.0) / 100.0 * 0.5;

    for chunk in pixels.chunks_exact_mut(3) {
        let mut r = chunk[0] as f32 / 255.0;
        let mut g = chunk[1] as f32 / 255.0;
        let mut b = chunk[2] as f32 / 255.0;

        (r, g, b) = apply_brightness(r, g, b, settings.brightness);
        (r, g, b) = apply_contrast(r, g, b, settings.contrast);
        (r, g, b) = apply_grayscale(r, g, b, settings.grayscale);
        (r, g, b) = apply_sepia(r, g, b, settings.sepia);

        if noise_amplitude > 0.0 {
            // One offset per pixel: luma speckle, not per-channel confetti.
            let offset: f32 = rng.gen_range(-noise_amplitude..=noise_amplitude);
            r += offset;
            g += offset;
            b += offset;
        }

        chunk[0] = (r.clamp(0.0, 1.0) * 255.0) as u8;
        chunk[1] = (g.clamp(0.0, 1.0) * 255.0) as u8;
        chunk[2] = (b.clamp(0.0, 1.0) * 255.0) as u8;
    }
}

/// Shift all channels by `brightness / 100`.
#[inline]
fn apply_brightness(r: f32, g: f32, b: f32, brightness: f32) -> (f32, f32, f32) {
    if brightness == 0.0 {
        return (r, g, b);
    }
    let shift = brightness / 100.0;
    (r + shift, g + shift, b + shift)
}

/// Scale the distance from the midpoint by `1 + contrast / 100`.
#[inline]
fn apply_contrast(r: f32, g: f32, b: f32, contrast: f32) -> (f32, f32, f32) {
    if contrast == 0.0 {
        return (r, g, b);
    }
    let factor = 1.0 + contrast / 100.0;
    let midpoint = 0.5;
    (
        (r - midpoint) * factor + midpoint,
        (g - midpoint) * factor + midpoint,
        (b - midpoint) * factor + midpoint,
    )
}

/// BT.709 luminance.
#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Blend each channel toward the pixel's luminance.
#[inline]
fn apply_grayscale(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let t = (amount / 100.0).clamp(0.0, 1.0);
    let gray = luminance(r, g, b);
    (
        r + (gray - r) * t,
        g + (gray - g) * t,
        b + (gray - b) * t,
    )
}

/// Blend toward the standard sepia matrix.
#[inline]
fn apply_sepia(r: f32, g: f32, b: f32, amount: f32) -> (f32, f32, f32) {
    if amount == 0.0 {
        return (r, g, b);
    }
    let t = (amount / 100.0).clamp(0.0, 1.0);
    let sr = 0.393 * r + 0.769 * g + 0.189 * b;
    let sg = 0.349 * r + 0.686 * g + 0.168 * b;
    let sb = 0.272 * r + 0.534 * g + 0.131 * b;
    (r + (sr - r) * t, g + (sg - g) * t, b + (sb - b) * t)
}
