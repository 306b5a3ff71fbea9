//! Color math for the palette widget.
//!
//! Hex parsing, RGB/HSL conversion, and the derived swatch rows the widget
//! renders (shades, tints, complement). Plain value types and arithmetic;
//! hue is in degrees 0..360, saturation and lightness in percent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from color string parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// The input is not a 3- or 6-digit hex color.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees (0..360), saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb`, or `rgb`.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(ColorError::InvalidHex(input.to_string())),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| ColorError::InvalidHex(input.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        } * 60.0;

        Hsl {
            h,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Color opposite on the hue wheel, same saturation and lightness.
    pub fn complementary(self) -> Rgb {
        let mut hsl = self.to_hsl();
        hsl.h = (hsl.h + 180.0) % 360.0;
        hsl.to_rgb()
    }
}

impl Hsl {
    /// Create an HSL color, wrapping hue into 0..360 and clamping
    /// saturation/lightness into 0..100.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Convert to RGB.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }
}

/// Progressively darker variants of `color`, original first.
pub fn shades(color: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = color.to_hsl();
    (0..count)
        .map(|i| {
            let t = i as f32 / count.max(1) as f32;
            Hsl {
                l: hsl.l * (1.0 - t),
                ..hsl
            }
            .to_rgb()
        })
        .collect()
}

/// Progressively lighter variants of `color`, original first.
pub fn tints(color: Rgb, count: usize) -> Vec<Rgb> {
    let hsl = color.to_hsl();
    (0..count)
        .map(|i| {
            let t = i as f32 / count.max(1) as f32;
            Hsl {
                l: hsl.l + (100.0 - hsl.l) * t,
                ..hsl
            }
            .to_rgb()
        })
        .collect()
}


// ============================================================================
// Property-Based Tests
// ============================================================================
