//! Exact decimal arithmetic for conversion factors
//!
//! Factors and offsets are dashu-float decimals carried at 50 significant
//! digits, so definitions such as 1 mi = 1609.344 m or 1 °F = 5/9 K lose
//! nothing before the final rounding. Values cross the converter boundary as
//! `f64`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use dashu_float::DBig;
use dashu_int::IBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Not a finite number: {0}")]
    NonFinite(f64),

    #[error("Result does not fit in an f64")]
    Overflow,
}

/// Significant decimal digits kept through every operation
const DIGITS: usize = 50;

/// A decimal number with 50 significant digits
#[derive(Debug, Clone)]
pub struct Number {
    inner: DBig,
}

impl Number {
    fn wrap(value: DBig) -> Self {
        Self { inner: value.with_precision(DIGITS).value() }
    }

    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    pub fn from_i64(n: i64) -> Self {
        Self::wrap(DBig::from(n))
    }

    /// `num / den`, rounded to the working precision
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, NumberError> {
        Self::from_i64(num).checked_div(&Self::from_i64(den))
    }

    /// From a finite `f64`, via its shortest round-trip decimal text.
    ///
    /// `0.1` therefore becomes exactly one tenth rather than its binary
    /// expansion.
    pub fn try_from_f64(f: f64) -> Result<Self, NumberError> {
        if !f.is_finite() {
            return Err(NumberError::NonFinite(f));
        }
        format!("{}", f).parse()
    }

    /// Nearest `f64`; parsing the exact decimal text rounds correctly
    pub fn to_f64(&self) -> Result<f64, NumberError> {
        let text = self.inner.to_string();
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            Ok(_) => Err(NumberError::Overflow),
            Err(_) => Err(NumberError::ParseError(text)),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.inner == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.inner < DBig::ZERO
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::wrap(&self.inner + &other.inner)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self::wrap(&self.inner - &other.inner)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self::wrap(&self.inner * &other.inner)
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self::wrap(&self.inner / &other.inner))
    }

    /// Integer power; a negative exponent of zero is a division by zero
    pub fn powi(&self, exp: i32) -> Result<Self, NumberError> {
        let positive = (0..exp.unsigned_abs()).fold(Self::one(), |acc, _| acc.mul(self));
        if exp < 0 {
            Self::one().checked_div(&positive)
        } else {
            Ok(positive)
        }
    }

    /// Rounded to `places` decimals for display
    pub fn to_fixed(&self, places: usize) -> String {
        match self.to_f64() {
            Ok(f) => format!("{:.*}", places, f),
            Err(_) => self.inner.to_string(),
        }
    }
}

/// Accepts `"1609.344"`, `"-40"`, ratios like `"5/9"` and integer-mantissa
/// exponents like `"9460730472580800e0"`.
impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || NumberError::ParseError(s.to_string());

        if let Some((num, den)) = s.split_once('/') {
            let num: DBig = num.trim().parse().map_err(|_| bad())?;
            let den: DBig = den.trim().parse().map_err(|_| bad())?;
            return Self::wrap(num).checked_div(&Self::wrap(den));
        }

        if !s.contains('.') {
            if let Some((mantissa, exp)) = s.split_once(['e', 'E']) {
                let mantissa: IBig = mantissa.parse().map_err(|_| bad())?;
                let exp: isize = exp.parse().map_err(|_| bad())?;
                return Ok(Self::wrap(DBig::from_parts(mantissa, exp)));
            }
        }

        s.parse::<DBig>().map(Self::wrap).map_err(|_| bad())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed(10))
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.partial_cmp(&other.inner).unwrap_or(Ordering::Equal)
    }
}
