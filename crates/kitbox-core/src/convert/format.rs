//! Result formatting for the unit converter.

/// Render a converted value for display.
///
/// Extreme magnitudes switch to exponential notation so a meters-to-nanometers
/// style conversion stays readable; everything else is fixed-point with up to
/// six decimals and trailing zeros stripped.
pub(crate) fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 || (magnitude > 0.0 && magnitude < 0.0001) {
        return format!("{value:.4e}");
    }
    let fixed = format!("{value:.6}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_point_strips_trailing_zeros() {
        assert_eq!(format_value(0.001), "0.001");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(3.141592653), "3.141593");
    }

    #[test]
    fn test_integer_part_is_kept() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(-42.0), "-42");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_large_magnitudes_render_exponential() {
        assert_eq!(format_value(2_500_000.0), "2.5000e6");
        assert_eq!(format_value(-1_000_000.0), "-1.0000e6");
        // Just below the threshold stays fixed-point.
        assert_eq!(format_value(999_999.5), "999999.5");
    }

    #[test]
    fn test_tiny_magnitudes_render_exponential() {
        assert_eq!(format_value(0.00005), "5.0000e-5");
        assert_eq!(format_value(-0.000012), "-1.2000e-5");
        // The boundary itself stays fixed-point.
        assert_eq!(format_value(0.0001), "0.0001");
    }
}
