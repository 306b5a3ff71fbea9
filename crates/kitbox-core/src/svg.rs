//! Procedural SVG generators for the blob and pattern widgets.
//!
//! Both generators are pure functions of their options: the seed fully
//! determines the geometry, so the widget can offer a "shuffle" button that
//! just picks a new seed, and re-render the exact same shape after a reload.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use thiserror::Error;

/// Errors from generator option validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SvgError {
    /// An option is out of its valid range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Options for the blob generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobOptions {
    /// Square view box edge in user units.
    pub size: u32,
    /// Vertices around the circle (minimum 3).
    pub points: u32,
    /// 0.0 keeps a circle; 1.0 lets vertices fall anywhere between the
    /// center and the outer radius.
    pub randomness: f32,
    /// Seed for the vertex jitter.
    pub seed: u64,
    /// Fill color, any CSS color string.
    pub fill: String,
}

impl Default for BlobOptions {
    fn default() -> Self {
        Self {
            size: 480,
            points: 8,
            randomness: 0.35,
            seed: 0,
            fill: "#6366f1".to_string(),
        }
    }
}

/// Generate a smooth closed blob as standalone SVG markup.
///
/// Vertices sit at equal angles around the center with seeded radius jitter;
/// the outline is drawn with quadratic curves through consecutive edge
/// midpoints, each vertex acting as the control point, which closes the path
/// without a visible seam.
pub fn generate_blob(options: &BlobOptions) -> Result<String, SvgError> {
    if options.size == 0 {
        return Err(SvgError::InvalidOptions("size must be non-zero".to_string()));
    }
    if options.points < 3 {
        return Err(SvgError::InvalidOptions(format!(
            "blob needs at least 3 points, got {}",
            options.points
        )));
    }
    if !(0.0..=1.0).contains(&options.randomness) {
        return Err(SvgError::InvalidOptions(format!(
            "randomness must be within 0.0..=1.0, got {}",
            options.randomness
        )));
    }

    let mut rng = SmallRng::seed_from_u64(options.seed);
    let size = options.size as f32;
    let center = size / 2.0;
    // Leave a margin so the curve's bulges stay inside the view box.
    let outer_radius = size * 0.45;

    let vertices: Vec<(f32, f32)> = (0..options.points)
        .map(|i| {
            let angle = i as f32 / options.points as f32 * TAU;
            let jitter: f32 = rng.gen_range(0.0..=1.0) * options.randomness;
            let radius = outer_radius * (1.0 - jitter);
            (center + radius * angle.cos(), center + radius * angle.sin())
        })
        .collect();

    let path = smooth_closed_path(&vertices);

    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\">\
<path d=\"{path}\" fill=\"{fill}\"/></svg>",
        size = options.size,
        path = path,
        fill = options.fill,
    ))
}

/// Options for the pattern generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    /// Requested view box edge; trimmed down to a whole number of cells.
    pub size: u32,
    /// Cell edge in user units (minimum 1, at most `size`).
    pub cell: u32,
    /// Seed for shape selection and sizing.
    pub seed: u64,
    /// Shape color, any CSS color string.
    pub foreground: String,
    /// Backdrop color, any CSS color string.
    pub background: String,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            size: 320,
            cell: 40,
            seed: 0,
            foreground: "#0f172a".to_string(),
            background: "#f1f5f9".to_string(),
        }
    }
}

/// Generate a tiled pattern of seeded-random primitives as SVG markup.
///
/// Each cell gets one of circle/square/triangle at a seeded random scale.
/// The view box is `size` trimmed down to a whole number of cells so the
/// tiling has no partial row or column.
pub fn generate_pattern(options: &PatternOptions) -> Result<String, SvgError> {
    if options.size == 0 {
        return Err(SvgError::InvalidOptions("size must be non-zero".to_string()));
    }
    if options.cell == 0 {
        return Err(SvgError::InvalidOptions("cell must be non-zero".to_string()));
    }
    if options.cell > options.size {
        return Err(SvgError::InvalidOptions(format!(
            "cell ({}) must not exceed size ({})",
            options.cell, options.size
        )));
    }

    let mut rng = SmallRng::seed_from_u64(options.seed);
    let cells = options.size / options.cell;
    let span = cells * options.cell;
    let cell = options.cell as f32;

    let mut body = String::new();
    for row in 0..cells {
        for col in 0..cells {
            let cx = col as f32 * cell + cell / 2.0;
            let cy = row as f32 * cell + cell / 2.0;
            let scale: f32 = rng.gen_range(0.4..=0.8);
            let half = cell * 0.5 * scale;

            match rng.gen_range(0u8..3) {
                0 => body.push_str(&format!(
                    "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{half:.2}\" fill=\"{}\"/>",
                    options.foreground
                )),
                1 => body.push_str(&format!(
                    "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
                    cx - half,
                    cy - half,
                    half * 2.0,
                    half * 2.0,
                    options.foreground
                )),
                _ => body.push_str(&format!(
                    "<polygon points=\"{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}\" fill=\"{}\"/>",
                    cx,
                    cy - half,
                    cx - half,
                    cy + half,
                    cx + half,
                    cy + half,
                    options.foreground
                )),
            }
        }
    }

    Ok(format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {span} {span}\">\
<rect width=\"{span}\" height=\"{span}\" fill=\"{}\"/>{body}</svg>",
        options.background,
    ))
}

fn midpoint(a: (f32, f32), b: (f32, f32)) -> (f32, f32) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

fn smooth_closed_path(vertices: &[(f32, f32)]) -> String {
    let n = vertices.len();
    let start = midpoint(vertices[n - 1], vertices[0]);
    let mut d = format!("M {:.2} {:.2}", start.0, start.1);
    for i in 0..n {
        let control = vertices[i];
        let end = midpoint(vertices[i], vertices[(i + 1) % n]);
        d.push_str(&format!(
            " Q {:.2} {:.2} {:.2} {:.2}",
            control.0, control.1, end.0, end.1
        ));
    }
    d.push_str(" Z");
    d
}
