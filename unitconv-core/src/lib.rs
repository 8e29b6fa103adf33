//! unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout unitconv:
//! - `Number`: Arbitrary precision decimals for conversion factors
//! - `UcError`: Structured errors for clients

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{UcError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, UcError, Severity};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        fn n(s: &str) -> Number {
            s.parse().unwrap()
        }

        #[test]
        fn test_parse_forms() {
            assert_eq!(n("1609.344").to_f64().unwrap(), 1609.344);
            assert_eq!(n(" -40 ").to_f64().unwrap(), -40.0);
            assert_eq!(n("15e2"), Number::from_i64(1500));
            assert!((n("5/9").to_f64().unwrap() - 5.0 / 9.0).abs() < 1e-15);
        }

        #[test]
        fn test_parse_rejects() {
            assert!("abc".parse::<Number>().is_err());
            assert!("1/x".parse::<Number>().is_err());
            assert_eq!("1/0".parse::<Number>(), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_f64_values_survive_the_trip() {
            for f in [0.0, 1.0, -40.0, 0.1, 273.15, 1.0e-9, 123456.789, 6.02e23] {
                let value = Number::try_from_f64(f).unwrap();
                assert_eq!(value.to_f64().unwrap(), f, "value {}", f);
            }
        }

        #[test]
        fn test_non_finite_rejected() {
            assert!(matches!(Number::try_from_f64(f64::NAN), Err(NumberError::NonFinite(_))));
            assert!(matches!(Number::try_from_f64(f64::NEG_INFINITY), Err(NumberError::NonFinite(_))));
        }

        #[test]
        fn test_decimal_sums_are_exact() {
            assert_eq!(n("0.1").add(&n("0.2")), n("0.3"));
            assert_eq!(n("0.3").sub(&n("0.1")), n("0.2"));
        }

        #[test]
        fn test_fahrenheit_offset_is_exact() {
            // 32 °F sits exactly at 273.15 K
            let five_ninths = Number::from_ratio(5, 9).unwrap();
            let kelvin = n("32").mul(&five_ninths).add(&n("459.67").mul(&five_ninths));
            assert_eq!(kelvin.to_f64().unwrap(), 273.15);
        }

        #[test]
        fn test_division() {
            assert_eq!(Number::one().checked_div(&Number::zero()), Err(NumberError::DivisionByZero));
            assert_eq!(n("1609.344").checked_div(&n("1000")).unwrap(), n("1.609344"));
        }

        #[test]
        fn test_powi() {
            let ten = Number::from_i64(10);
            assert_eq!(ten.powi(3).unwrap(), Number::from_i64(1000));
            assert_eq!(ten.powi(-2).unwrap(), n("0.01"));
            assert_eq!(ten.powi(0).unwrap(), Number::one());
            assert!(Number::zero().powi(-1).is_err());
        }

        #[test]
        fn test_to_fixed() {
            assert_eq!(n("1.609344").to_fixed(4), "1.6093");
            assert_eq!(n("32").to_string(), "32.0000000000");
        }

        #[test]
        fn test_overflow() {
            let huge = n("1e400");
            assert_eq!(huge.to_f64(), Err(NumberError::Overflow));
        }

        #[test]
        fn test_serde_as_string() {
            let value = n("0.3048");
            let json = serde_json::to_string(&value).unwrap();
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }

        #[test]
        fn test_ordering() {
            assert!(n("-40") < Number::zero());
            assert!(n("-40").is_negative());
            assert!(Number::zero().is_zero());
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_display_includes_code_and_suggestion() {
            let e = UcError::invalid_unit("lightyears", "Length");
            let text = e.to_string();
            assert!(text.starts_with("[INVALID_UNIT]"));
            assert!(text.contains("suggestion"));
        }

        #[test]
        fn test_severity_defaults() {
            assert_eq!(UcError::no_history("empty").severity, Severity::Warning);
            assert_eq!(UcError::translation_unavailable("offline").severity, Severity::Notice);
            assert_eq!(UcError::unknown_tool("x").severity, Severity::Error);
        }

        #[test]
        fn test_from_number_error() {
            let e: UcError = NumberError::DivisionByZero.into();
            assert_eq!(e.code, codes::NUMERIC);
        }

        #[test]
        fn test_serialize_skips_empty_suggestion() {
            let e = UcError::new(codes::NUMERIC, "x");
            let json = serde_json::to_value(&e).unwrap();
            assert!(json.get("suggestion").is_none());
            assert_eq!(json["severity"], "error");
        }
    }
}
