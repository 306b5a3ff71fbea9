//! Static unit tables for the conversion engine.
//!
//! Each ratio category stores "units per base unit" for every unit it knows,
//! with an implicit base (meters, grams, liters, square meters, seconds,
//! meters per second). Converting goes through the base: divide by the source
//! ratio, multiply by the target ratio. That keeps the tables linear in unit
//! count and means adding a unit only requires its single ratio-to-base.
//!
//! Temperature scales share no zero point, so they are not in a ratio table;
//! conversion pivots through Celsius with affine formulas instead.

use serde::{Deserialize, Serialize};

/// A family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Volume,
    Area,
    Time,
    Speed,
}

impl Category {
    /// Lowercase name used in UI payloads and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
            Category::Time => "time",
            Category::Speed => "speed",
        }
    }

    /// Resolve a category from its lowercase name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().iter().copied().find(|c| c.name() == name)
    }

    /// All categories, in the order the UI lists them.
    pub fn all() -> &'static [Category] {
        &[
            Category::Length,
            Category::Mass,
            Category::Temperature,
            Category::Volume,
            Category::Area,
            Category::Time,
            Category::Speed,
        ]
    }
}

/// Ratio table rows: (unit name, units per base unit).
type Ratios = &'static [(&'static str, f64)];

// Base unit: meters.
const LENGTH: Ratios = &[
    ("millimeters", 1000.0),
    ("centimeters", 100.0),
    ("meters", 1.0),
    ("kilometers", 0.001),
    ("inches", 39.370_078_740_157_48),
    ("feet", 3.280_839_895_013_123),
    ("yards", 1.093_613_298_337_707_8),
    ("miles", 6.213_711_922_373_339e-4),
];

// Base unit: grams.
const MASS: Ratios = &[
    ("milligrams", 1000.0),
    ("grams", 1.0),
    ("kilograms", 0.001),
    ("tonnes", 1e-6),
    ("ounces", 0.035_273_961_949_580_41),
    ("pounds", 0.002_204_622_621_848_776),
];

// Base unit: liters.
const VOLUME: Ratios = &[
    ("milliliters", 1000.0),
    ("liters", 1.0),
    ("cubic-meters", 0.001),
    ("fluid-ounces", 33.814_022_701_843),
    ("cups", 4.226_752_837_730_375),
    ("pints", 2.113_376_418_865_187_6),
    ("quarts", 1.056_688_209_432_593_8),
    ("gallons", 0.264_172_052_358_148_45),
];

// Base unit: square meters.
const AREA: Ratios = &[
    ("square-millimeters", 1_000_000.0),
    ("square-centimeters", 10_000.0),
    ("square-meters", 1.0),
    ("hectares", 1e-4),
    ("square-kilometers", 1e-6),
    ("square-inches", 1550.003_100_006_2),
    ("square-feet", 10.763_910_416_709_722),
    ("acres", 2.471_053_814_671_653e-4),
];

// Base unit: seconds.
const TIME: Ratios = &[
    ("milliseconds", 1000.0),
    ("seconds", 1.0),
    ("minutes", 1.0 / 60.0),
    ("hours", 1.0 / 3600.0),
    ("days", 1.0 / 86_400.0),
    ("weeks", 1.0 / 604_800.0),
];

// Base unit: meters per second.
const SPEED: Ratios = &[
    ("meters-per-second", 1.0),
    ("kilometers-per-hour", 3.6),
    ("miles-per-hour", 2.236_936_292_054_402_5),
    ("feet-per-second", 3.280_839_895_013_123),
    ("knots", 1.943_844_492_440_604_6),
];

const RATIO_CATEGORIES: &[(Category, Ratios)] = &[
    (Category::Length, LENGTH),
    (Category::Mass, MASS),
    (Category::Volume, VOLUME),
    (Category::Area, AREA),
    (Category::Time, TIME),
    (Category::Speed, SPEED),
];

/// Temperature units, converted through Celsius rather than ratios.
const TEMPERATURE: &[&str] = &["celsius", "fahrenheit", "kelvin"];

/// How a resolved unit converts within its category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum UnitKind {
    /// Linear ratio relative to the category's base unit.
    Ratio(f64),
    /// Affine conversion through Celsius.
    Temperature,
}

/// Resolve a unit name to its category and conversion kind.
///
/// Unit names are unique across all categories, so the first match is the
/// only match.
pub(crate) fn resolve(unit: &str) -> Option<(Category, UnitKind)> {
    if TEMPERATURE.contains(&unit) {
        return Some((Category::Temperature, UnitKind::Temperature));
    }
    RATIO_CATEGORIES.iter().find_map(|(category, ratios)| {
        ratios
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, ratio)| (*category, UnitKind::Ratio(*ratio)))
    })
}

/// Convert a temperature reading on the given scale to Celsius.
pub(crate) fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => value,
    }
}

/// Convert a Celsius reading to the given scale.
pub(crate) fn from_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "fahrenheit" => value * 9.0 / 5.0 + 32.0,
        "kelvin" => value + 273.15,
        _ => value,
    }
}

/// Unit names belonging to a category, in table order.
pub fn units_in(category: Category) -> Vec<&'static str> {
    if category == Category::Temperature {
        return TEMPERATURE.to_vec();
    }
    RATIO_CATEGORIES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, ratios)| ratios.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unit_names_unique_across_categories() {
        // Category lookup by unit name relies on this.
        let mut seen = HashSet::new();
        for category in Category::all() {
            for unit in units_in(*category) {
                assert!(seen.insert(unit), "duplicate unit name: {unit}");
            }
        }
    }

    #[test]
    fn test_every_ratio_category_has_a_base_unit() {
        for (category, ratios) in RATIO_CATEGORIES {
            assert!(
                ratios.iter().any(|(_, ratio)| *ratio == 1.0),
                "category {} has no ratio-1.0 base unit",
                category.name()
            );
        }
    }

    #[test]
    fn test_resolve_known_units() {
        assert_eq!(
            resolve("meters"),
            Some((Category::Length, UnitKind::Ratio(1.0)))
        );
        assert_eq!(
            resolve("celsius"),
            Some((Category::Temperature, UnitKind::Temperature))
        );
        assert!(matches!(resolve("knots"), Some((Category::Speed, _))));
        assert_eq!(resolve("smoots"), None);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_name(category.name()), Some(*category));
        }
        assert_eq!(Category::from_name("sound"), None);
    }

    #[test]
    fn test_celsius_pivot_formulas() {
        assert_eq!(to_celsius(32.0, "fahrenheit"), 0.0);
        assert_eq!(to_celsius(273.15, "kelvin"), 0.0);
        assert_eq!(from_celsius(100.0, "fahrenheit"), 212.0);
        assert_eq!(from_celsius(0.0, "kelvin"), 273.15);
        assert_eq!(from_celsius(21.5, "celsius"), 21.5);
    }

    #[test]
    fn test_units_in_lists_table_order() {
        let length = units_in(Category::Length);
        assert_eq!(length.first(), Some(&"millimeters"));
        assert!(length.contains(&"miles"));

        let temperature = units_in(Category::Temperature);
        assert_eq!(temperature, vec!["celsius", "fahrenheit", "kelvin"]);
    }
}
