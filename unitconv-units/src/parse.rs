//! Resolve unit strings: tokens, aliases and simple compounds

use crate::Unit;
use crate::unit::ConversionError;
use crate::registry::UNITS;

/// Resolve a unit string.
///
/// Accepts registry tokens ("km"), aliases and vocabulary names
/// ("kilometers"), one quotient ("km/h") and integer powers ("ft^3").
pub fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();
    if let Some(unit) = UNITS.get(s) {
        return Ok(unit.clone());
    }
    let expr = UNITS.alias_target(s).unwrap_or(s);

    match expr.split_once('/') {
        Some((num, den)) => factor(num)?.divide(&factor(den)?),
        None => factor(expr),
    }
}

fn factor(s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();
    let unknown = || ConversionError::UnknownUnit(s.to_string());

    let (base, exp) = match s.split_once('^') {
        Some((base, exp)) => (base.trim(), exp.trim().parse::<i8>().map_err(|_| unknown())?),
        None => (s, 1),
    };
    UNITS.get(base).ok_or_else(unknown)?.power(exp)
}
