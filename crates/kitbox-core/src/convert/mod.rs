//! Unit conversion engine for the converter widget.
//!
//! Converts a numeric value between two named units after checking that both
//! belong to the same measurement category. Ratio categories (length, mass,
//! volume, area, time, speed) convert through an implicit base unit; the
//! temperature category pivots through Celsius with affine formulas, because
//! its scales share no zero point and ratio multiplication would be wrong.
//!
//! The engine is a pure function over static tables: no shared state, safe to
//! call from any number of callers concurrently. All failures are typed,
//! recoverable results - the widget re-prompts, nothing panics.
//!
//! # Example
//!
//! ```ignore
//! use kitbox_core::convert::convert;
//!
//! let result = convert(1.0, "meters", "kilometers").unwrap();
//! assert_eq!(result.formatted, "0.001");
//! ```

mod format;
mod tables;

pub use tables::{units_in, Category};

use format::format_value;
use serde::{Deserialize, Serialize};
use tables::UnitKind;
use thiserror::Error;

/// Errors the converter reports back to the widget.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// Input value was NaN or infinite.
    #[error("value must be a finite number")]
    InvalidNumber,

    /// A unit name did not resolve in any category table.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units are known but belong to different categories.
    #[error("cannot convert {from_unit} ({from_category}) to {to_unit} ({to_category})")]
    IncompatibleCategories {
        from_unit: String,
        from_category: &'static str,
        to_unit: String,
        to_category: &'static str,
    },
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Raw converted value.
    pub value: f64,
    /// Display form of `value`: fixed-point for ordinary magnitudes,
    /// exponential for extreme ones.
    pub formatted: String,
    /// Category both units belong to.
    pub category: Category,
}

/// Convert `value` from `from_unit` to `to_unit`.
///
/// # Errors
///
/// * [`ConvertError::InvalidNumber`] when `value` is NaN or infinite
/// * [`ConvertError::UnknownUnit`] when either unit name is unrecognized
/// * [`ConvertError::IncompatibleCategories`] when the units belong to
///   different categories (meters to kilograms is meaningless and is
///   rejected rather than silently producing a number)
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::InvalidNumber);
    }

    let (from_category, from_kind) = tables::resolve(from_unit)
        .ok_or_else(|| ConvertError::UnknownUnit(from_unit.to_string()))?;
    let (to_category, to_kind) = tables::resolve(to_unit)
        .ok_or_else(|| ConvertError::UnknownUnit(to_unit.to_string()))?;

    if from_category != to_category {
        return Err(ConvertError::IncompatibleCategories {
            from_unit: from_unit.to_string(),
            from_category: from_category.name(),
            to_unit: to_unit.to_string(),
            to_category: to_category.name(),
        });
    }

    let result = match (from_kind, to_kind) {
        (UnitKind::Ratio(from_ratio), UnitKind::Ratio(to_ratio)) => {
            let base = value / from_ratio;
            base * to_ratio
        }
        // Categories match, so anything else is temperature on both sides.
        _ => tables::from_celsius(tables::to_celsius(value, from_unit), to_unit),
    };

    Ok(Conversion {
        value: result,
        formatted: format_value(result),
        category: from_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_kilometers() {
        let result = convert(1.0, "meters", "kilometers").unwrap();
        assert_eq!(result.value, 0.001);
        assert_eq!(result.formatted, "0.001");
        assert_eq!(result.category, Category::Length);
    }

    #[test]
    fn test_same_unit_is_identity() {
        let result = convert(123.456, "feet", "feet").unwrap();
        assert_eq!(result.value, 123.456);
    }

    #[test]
    fn test_inches_to_centimeters() {
        let result = convert(1.0, "inches", "centimeters").unwrap();
        assert!((result.value - 2.54).abs() < 1e-9);
    }

    #[test]
    fn test_pounds_to_kilograms() {
        let result = convert(1.0, "pounds", "kilograms").unwrap();
        assert!((result.value - 0.45359237).abs() < 1e-9);
    }

    #[test]
    fn test_hours_to_minutes() {
        let result = convert(1.5, "hours", "minutes").unwrap();
        assert!((result.value - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_kmh_to_mph() {
        let result = convert(100.0, "kilometers-per-hour", "miles-per-hour").unwrap();
        assert!((result.value - 62.137119223733395).abs() < 1e-6);
    }

    #[test]
    fn test_temperature_fixed_points() {
        assert_eq!(convert(0.0, "celsius", "fahrenheit").unwrap().value, 32.0);
        assert_eq!(
            convert(100.0, "celsius", "fahrenheit").unwrap().value,
            212.0
        );
        assert_eq!(convert(0.0, "celsius", "kelvin").unwrap().value, 273.15);
    }

    #[test]
    fn test_fahrenheit_to_kelvin_pivots_through_celsius() {
        let result = convert(32.0, "fahrenheit", "kelvin").unwrap();
        assert!((result.value - 273.15).abs() < 1e-9);
    }

    #[test]
    fn test_negative_temperature() {
        let result = convert(-40.0, "celsius", "fahrenheit").unwrap();
        assert_eq!(result.value, -40.0);
    }

    #[test]
    fn test_negative_and_zero_values_convert() {
        // The engine converts; physical-plausibility policy belongs to the UI.
        assert_eq!(convert(-5.0, "meters", "centimeters").unwrap().value, -500.0);
        assert_eq!(convert(0.0, "gallons", "liters").unwrap().value, 0.0);
    }

    #[test]
    fn test_cross_category_rejected() {
        let err = convert(5.0, "meters", "kilograms").unwrap_err();
        assert!(matches!(
            err,
            ConvertError::IncompatibleCategories {
                from_category: "length",
                to_category: "mass",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        assert_eq!(
            convert(5.0, "meters", "smoots").unwrap_err(),
            ConvertError::UnknownUnit("smoots".to_string())
        );
        assert_eq!(
            convert(5.0, "cubits", "meters").unwrap_err(),
            ConvertError::UnknownUnit("cubits".to_string())
        );
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert_eq!(
            convert(f64::NAN, "meters", "feet").unwrap_err(),
            ConvertError::InvalidNumber
        );
        assert_eq!(
            convert(f64::INFINITY, "meters", "feet").unwrap_err(),
            ConvertError::InvalidNumber
        );
        assert_eq!(
            convert(f64::NEG_INFINITY, "celsius", "kelvin").unwrap_err(),
            ConvertError::InvalidNumber
        );
    }

    #[test]
    fn test_extreme_magnitude_formats_exponential() {
        let result = convert(2.5, "square-kilometers", "square-meters").unwrap();
        assert_eq!(result.value, 2_500_000.0);
        assert_eq!(result.formatted, "2.5000e6");
    }

    #[test]
    fn test_error_messages_name_the_units() {
        let err = convert(1.0, "hours", "meters").unwrap_err();
        assert_eq!(err.to_string(), "cannot convert hours (time) to meters (length)");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
