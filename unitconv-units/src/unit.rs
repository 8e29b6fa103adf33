//! Units and the affine map to their base unit

use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unitconv_core::{Number, NumberError};
use crate::Dimension;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("cannot convert {from} ({from_dim}) to {to} ({to_dim}): incompatible dimensions")]
    IncompatibleDimensions {
        from: String,
        to: String,
        from_dim: Dimension,
        to_dim: Dimension,
    },

    /// Scales with an offset (celsius, fahrenheit) only convert on their own
    #[error("offset unit cannot be combined: {0}")]
    OffsetUnit(String),

    #[error("numeric error: {0}")]
    Number(#[from] NumberError),
}

/// A unit of measure.
///
/// A value `v` in this unit is `v * to_si_factor + to_si_offset` in the base
/// unit of its dimension. Only the celsius and fahrenheit scales have a
/// non-zero offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub symbol: String,
    pub name: String,
    pub dimension: Dimension,
    pub to_si_factor: Number,
    pub to_si_offset: Number,
    /// Quantity kind, e.g. "length"; "derived" for parsed compounds
    pub category: String,
}

impl Unit {
    /// A unit proportional to the base unit
    pub fn new(symbol: &str, name: &str, dimension: Dimension, to_si_factor: Number, category: &str) -> Self {
        Self::with_offset(symbol, name, dimension, to_si_factor, Number::zero(), category)
    }

    /// An affine unit such as a temperature scale
    pub fn with_offset(
        symbol: &str,
        name: &str,
        dimension: Dimension,
        to_si_factor: Number,
        to_si_offset: Number,
        category: &str,
    ) -> Self {
        Unit {
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            to_si_factor,
            to_si_offset,
            category: category.to_string(),
        }
    }

    pub fn has_offset(&self) -> bool {
        !self.to_si_offset.is_zero()
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    pub fn to_si(&self, value: &Number) -> Number {
        value.mul(&self.to_si_factor).add(&self.to_si_offset)
    }

    pub fn from_si(&self, si: &Number) -> Result<Number, NumberError> {
        si.sub(&self.to_si_offset).checked_div(&self.to_si_factor)
    }

    /// Express `value` (in `self`) in `target`
    pub fn convert_to(&self, value: &Number, target: &Unit) -> Result<Number, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::IncompatibleDimensions {
                from: self.symbol.clone(),
                to: target.symbol.clone(),
                from_dim: self.dimension,
                to_dim: target.dimension,
            });
        }
        if self.symbol == target.symbol {
            return Ok(value.clone());
        }
        Ok(target.from_si(&self.to_si(value))?)
    }

    fn reject_offset(&self, expr: String) -> Result<(), ConversionError> {
        if self.has_offset() {
            Err(ConversionError::OffsetUnit(expr))
        } else {
            Ok(())
        }
    }

    /// `self / other`, e.g. km and h give km/h
    pub fn divide(&self, other: &Unit) -> Result<Unit, ConversionError> {
        let symbol = format!("{}/{}", self.symbol, other.symbol);
        self.reject_offset(symbol.clone())?;
        other.reject_offset(symbol.clone())?;

        Ok(Unit::new(
            &symbol,
            &format!("{} per {}", self.name, other.name),
            self.dimension.div(other.dimension),
            self.to_si_factor.checked_div(&other.to_si_factor)?,
            "derived",
        ))
    }

    /// `self^exp`, e.g. ft^3
    pub fn power(&self, exp: i8) -> Result<Unit, ConversionError> {
        if exp == 1 {
            return Ok(self.clone());
        }
        let symbol = format!("{}^{}", self.symbol, exp);
        self.reject_offset(symbol.clone())?;

        Ok(Unit::new(
            &symbol,
            &format!("{}^{}", self.name, exp),
            self.dimension.powi(exp),
            self.to_si_factor.powi(exp.into())?,
            "derived",
        ))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
