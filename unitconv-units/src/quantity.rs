//! A value tagged with its unit

use std::fmt;
use serde::Serialize;
use unitconv_core::Number;
use crate::Unit;
use crate::unit::ConversionError;

#[derive(Debug, Clone, Serialize)]
pub struct Quantity {
    pub value: Number,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: Number, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn in_si(&self) -> Number {
        self.unit.to_si(&self.value)
    }

    /// The same quantity expressed in `target`
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity, ConversionError> {
        let value = self.unit.convert_to(&self.value, target)?;
        Ok(Quantity::new(value, target.clone()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Equal when both describe the same physical amount
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.unit.is_compatible(&other.unit) && self.in_si() == other.in_si()
    }
}
