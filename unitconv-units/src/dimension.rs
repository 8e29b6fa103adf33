//! Physical dimensions as exponents of the base quantities the converter uses

use std::fmt;
use serde::{Deserialize, Serialize};

/// Exponents of length, mass, time and thermodynamic temperature.
///
/// Two units are convertible exactly when their dimensions are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub temperature: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0);
    pub const MASS: Dimension = Dimension::new(0, 1, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 0, 1, 0);
    pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 1);
    pub const VOLUME: Dimension = Dimension::new(3, 0, 0, 0);
    pub const VELOCITY: Dimension = Dimension::new(1, 0, -1, 0);

    pub const fn new(length: i8, mass: i8, time: i8, temperature: i8) -> Self {
        Dimension { length, mass, time, temperature }
    }

    fn exponents(self) -> [i8; 4] {
        [self.length, self.mass, self.time, self.temperature]
    }

    fn zip(self, other: Dimension, f: impl Fn(i8, i8) -> i8) -> Dimension {
        let [l, m, t, k] = self.exponents();
        let [l2, m2, t2, k2] = other.exponents();
        Dimension::new(f(l, l2), f(m, m2), f(t, t2), f(k, k2))
    }

    pub fn is_dimensionless(self) -> bool {
        self == Self::DIMENSIONLESS
    }

    pub fn mul(self, other: Dimension) -> Dimension {
        self.zip(other, i8::saturating_add)
    }

    pub fn div(self, other: Dimension) -> Dimension {
        self.zip(other, i8::saturating_sub)
    }

    pub fn powi(self, exp: i8) -> Dimension {
        self.zip(self, |a, _| a.saturating_mul(exp))
    }

    /// Name of the quantity kind, for the dimensions the catalog covers
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::DIMENSIONLESS => "dimensionless",
            Self::LENGTH => "length",
            Self::MASS => "mass",
            Self::TIME => "time",
            Self::TEMPERATURE => "temperature",
            Self::VOLUME => "volume",
            Self::VELOCITY => "velocity",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = ["L", "M", "T", "Θ"]
            .iter()
            .zip(self.exponents())
            .filter(|(_, exp)| *exp != 0)
            .map(|(symbol, exp)| match exp {
                1 => symbol.to_string(),
                _ => format!("{}^{}", symbol, exp),
            })
            .collect();

        if terms.is_empty() {
            f.write_str("1")
        } else {
            f.write_str(&terms.join(" "))
        }
    }
}
