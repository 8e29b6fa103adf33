//! The unit converter
//!
//! `convert` maps (value, from, to) to a converted magnitude. Unknown units,
//! incompatible dimensions and numeric errors all collapse into
//! `ConversionOutcome::Failure`; `try_convert` keeps the detailed error for
//! callers that want it.

use serde::{Deserialize, Serialize};
use unitconv_core::Number;
use crate::{Quantity, UnitName};
use crate::parse::parse_unit;
use crate::unit::ConversionError;

/// Result of one conversion request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum ConversionOutcome {
    Success(f64),
    Failure,
}

impl ConversionOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ConversionOutcome::Success(_))
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            ConversionOutcome::Success(v) => Some(*v),
            ConversionOutcome::Failure => None,
        }
    }

    /// `(value, true)` on success, `(0.0, false)` on failure
    pub fn into_parts(self) -> (f64, bool) {
        match self {
            ConversionOutcome::Success(v) => (v, true),
            ConversionOutcome::Failure => (0.0, false),
        }
    }
}

/// Map the temperature scale names to the unit system's temperature tokens.
///
/// Celsius and Fahrenheit differ from kelvin by an offset as well as a
/// scale, so they live in the registry as offset units under their own
/// tokens. Every other name passes through untouched.
pub fn normalize_unit_name(name: &str) -> &str {
    match name {
        "celsius" => "degC",
        "fahrenheit" => "degF",
        "kelvin" => "K",
        other => other,
    }
}

/// Convert with the underlying error kept
pub fn try_convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let from_unit = parse_unit(normalize_unit_name(from.trim()))?;
    let to_unit = parse_unit(normalize_unit_name(to.trim()))?;

    let quantity = Quantity::new(Number::try_from_f64(value)?, from_unit);
    let converted = quantity.convert_to(&to_unit)?;
    Ok(converted.value.to_f64()?)
}

/// Convert `value` from one unit name to another.
///
/// Never fails loudly: every error becomes `Failure`.
pub fn convert(value: f64, from: &str, to: &str) -> ConversionOutcome {
    collapse(try_convert(value, from, to), from, to)
}

/// Convert between two members of the curated vocabulary
pub fn convert_units(value: f64, from: UnitName, to: UnitName) -> ConversionOutcome {
    collapse(try_convert(value, from.token(), to.token()), from.as_str(), to.as_str())
}

fn collapse(result: Result<f64, ConversionError>, from: &str, to: &str) -> ConversionOutcome {
    match result {
        Ok(v) => ConversionOutcome::Success(v),
        Err(e) => {
            tracing::debug!(from, to, error = %e, "conversion failed");
            ConversionOutcome::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, LengthUnit, WeightUnit, TemperatureUnit, SpeedUnit};

    fn approx(actual: f64, expected: f64, tol: f64) -> bool {
        (actual - expected).abs() <= tol * expected.abs().max(1.0)
    }

    fn ok(outcome: ConversionOutcome) -> f64 {
        outcome.value().unwrap_or_else(|| panic!("expected success, got {:?}", outcome))
    }

    #[test]
    fn test_meters_to_kilometers() {
        assert_eq!(convert(1.0, "meters", "kilometers"), ConversionOutcome::Success(0.001));
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert!(approx(ok(convert(0.0, "celsius", "fahrenheit")), 32.0, 1e-12));
        assert!(approx(ok(convert(100.0, "celsius", "fahrenheit")), 212.0, 1e-12));
        // The scales cross at -40
        assert!(approx(ok(convert(-40.0, "fahrenheit", "celsius")), -40.0, 1e-12));
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert!(approx(ok(convert(100.0, "celsius", "kelvin")), 373.15, 1e-12));
        assert!(approx(ok(convert(0.0, "kelvin", "celsius")), -273.15, 1e-12));
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        // K = (F - 32) * 5/9 + 273.15
        assert!(approx(ok(convert(32.0, "fahrenheit", "kelvin")), 273.15, 1e-12));
        assert!(approx(ok(convert(212.0, "fahrenheit", "kelvin")), 373.15, 1e-12));
        assert!(approx(ok(convert(0.0, "kelvin", "fahrenheit")), -459.67, 1e-12));
    }

    #[test]
    fn test_miles_to_kilometers() {
        assert!(approx(ok(convert(1.0, "miles", "kilometers")), 1.609344, 1e-12));
    }

    #[test]
    fn test_other_categories() {
        assert!(approx(ok(convert(1.0, "pounds", "ounces")), 16.0, 1e-12));
        assert!(approx(ok(convert(1.0, "gallons", "cups")), 16.0, 1e-12));
        assert!(approx(ok(convert(1.0, "days", "minutes")), 1440.0, 1e-12));
        assert!(approx(ok(convert(36.0, "kilometers_per_hour", "meters_per_second")), 10.0, 1e-12));
        assert!(approx(ok(convert(1.0, "miles_per_hour", "kilometers_per_hour")), 1.609344, 1e-12));
        assert!(approx(ok(convert(12.0, "inches", "feet")), 1.0, 1e-12));
    }

    #[test]
    fn test_cross_category_fails() {
        assert_eq!(convert(5.0, "meters", "kilograms").into_parts(), (0.0, false));
        assert_eq!(convert(1.0, "celsius", "seconds"), ConversionOutcome::Failure);
        assert_eq!(convert(1.0, "liters", "meters"), ConversionOutcome::Failure);
    }

    #[test]
    fn test_unknown_unit_fails() {
        assert_eq!(convert(1.0, "lightyears", "meters").into_parts(), (0.0, false));
        assert_eq!(convert(1.0, "meters", ""), ConversionOutcome::Failure);
    }

    #[test]
    fn test_non_finite_value_fails() {
        assert_eq!(convert(f64::NAN, "meters", "feet"), ConversionOutcome::Failure);
        assert_eq!(convert(f64::INFINITY, "meters", "feet"), ConversionOutcome::Failure);
    }

    #[test]
    fn test_try_convert_keeps_detail() {
        assert!(matches!(
            try_convert(1.0, "lightyears", "meters"),
            Err(ConversionError::UnknownUnit(u)) if u == "lightyears"
        ));
        assert!(matches!(
            try_convert(1.0, "meters", "grams"),
            Err(ConversionError::IncompatibleDimensions { .. })
        ));
    }

    #[test]
    fn test_normalize_unit_name() {
        assert_eq!(normalize_unit_name("celsius"), "degC");
        assert_eq!(normalize_unit_name("fahrenheit"), "degF");
        assert_eq!(normalize_unit_name("kelvin"), "K");
        assert_eq!(normalize_unit_name("meters"), "meters");
    }

    #[test]
    fn test_typed_entry_point() {
        let from = UnitName::Length(LengthUnit::Miles);
        let to = UnitName::Length(LengthUnit::Kilometers);
        assert!(approx(ok(convert_units(1.0, from, to)), 1.609344, 1e-12));

        let c = UnitName::Temperature(TemperatureUnit::Celsius);
        let f = UnitName::Temperature(TemperatureUnit::Fahrenheit);
        assert!(approx(ok(convert_units(37.0, c, f)), 98.6, 1e-12));

        let kg = UnitName::Weight(WeightUnit::Kilograms);
        let mph = UnitName::Speed(SpeedUnit::MilesPerHour);
        assert_eq!(convert_units(1.0, kg, mph), ConversionOutcome::Failure);
    }

    #[test]
    fn test_identity_is_exact() {
        for unit in UnitName::all() {
            for v in [0.0, 1.0, -17.5, 0.1, 98.6, 1.0e6, 3.0e-7] {
                assert_eq!(ok(convert_units(v, unit, unit)), v, "{} {}", v, unit);
            }
        }
    }

    #[test]
    fn test_round_trip_within_category() {
        for category in Category::all() {
            let units = category.units();
            for &a in &units {
                for &b in &units {
                    for v in [1.0, -3.25, 1234.5678] {
                        let there = ok(convert_units(v, a, b));
                        let back = ok(convert_units(there, b, a));
                        assert!(approx(back, v, 1e-12), "{} {} -> {} -> {}", v, a, b, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cross_category_pairs_all_fail() {
        for a in UnitName::all() {
            for b in UnitName::all().filter(|b| b.category() != a.category()) {
                assert_eq!(convert_units(1.0, a, b), ConversionOutcome::Failure, "{} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(ConversionOutcome::Success(2.5)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["value"], 2.5);
        let json = serde_json::to_value(ConversionOutcome::Failure).unwrap();
        assert_eq!(json["status"], "failure");
    }
}
