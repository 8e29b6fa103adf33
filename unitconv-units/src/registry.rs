//! The unit registry: canonical tokens, exact definitions and aliases
//!
//! Definitions are decimal strings so that the SI and US customary
//! constants stay exact. Compound tokens such as `m/s` are not stored; the
//! parser builds them from their parts.

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::{Number, NumberError};
use crate::{Dimension, Unit, UnitName};

pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// (token, name, base units per unit, aliases)
type Definition = (&'static str, &'static str, &'static str, &'static [&'static str]);

const LENGTH: &[Definition] = &[
    ("m", "meter", "1", &["meter", "metre", "metres"]),
    ("km", "kilometer", "1000", &["kilometer", "kilometre"]),
    ("cm", "centimeter", "0.01", &["centimeter", "centimetre"]),
    ("mm", "millimeter", "0.001", &["millimeter", "millimeters"]),
    ("in", "inch", "0.0254", &["inch"]),
    ("ft", "foot", "0.3048", &["foot"]),
    ("yd", "yard", "0.9144", &["yard", "yards"]),
    ("mi", "mile", "1609.344", &["mile"]),
];

const MASS: &[Definition] = &[
    ("kg", "kilogram", "1", &["kilogram"]),
    ("g", "gram", "0.001", &["gram"]),
    ("mg", "milligram", "0.000001", &["milligram", "milligrams"]),
    ("t", "tonne", "1000", &["tonne", "tonnes"]),
    ("lb", "pound", "0.45359237", &["pound", "lbs"]),
    ("oz", "ounce", "0.028349523125", &["ounce"]),
];

const TIME: &[Definition] = &[
    ("s", "second", "1", &["second", "sec"]),
    ("min", "minute", "60", &["minute"]),
    ("h", "hour", "3600", &["hour", "hr"]),
    ("d", "day", "86400", &["day"]),
    ("wk", "week", "604800", &["week", "weeks"]),
];

const VOLUME: &[Definition] = &[
    ("L", "liter", "0.001", &["l", "liter", "litre"]),
    ("mL", "milliliter", "0.000001", &["ml", "milliliter"]),
    ("gal", "gallon", "0.003785411784", &["gallon"]),
    ("cup", "cup", "0.0002365882365", &[]),
    ("floz", "fluid ounce", "0.0000295735295625", &["fl_oz"]),
];

const VELOCITY: &[Definition] = &[
    ("mph", "mile per hour", "0.44704", &[]),
    ("kn", "knot", "1852/3600", &["knot", "knots"]),
];

/// Aliases that stand for a compound expression rather than a stored token
const EXPRESSION_ALIASES: &[(&str, &str)] = &[("kph", "km/h")];

pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        if let Err(e) = registry.load() {
            tracing::error!(error = %e, "unit registry incomplete");
        }
        registry
    }

    /// Look up a token or an alias of a stored token
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units
            .get(name)
            .or_else(|| self.aliases.get(name).and_then(|token| self.units.get(token)))
    }

    /// What an alias stands for; may be a compound expression like "m/s"
    pub fn alias_target(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Unit> {
        self.units.values().filter(|u| u.category == category).collect()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    fn load(&mut self) -> Result<(), NumberError> {
        for (table, dimension) in [
            (LENGTH, Dimension::LENGTH),
            (MASS, Dimension::MASS),
            (TIME, Dimension::TIME),
            (VOLUME, Dimension::VOLUME),
            (VELOCITY, Dimension::VELOCITY),
        ] {
            self.load_table(table, dimension)?;
        }
        self.load_temperature()?;

        for (alias, expr) in EXPRESSION_ALIASES {
            self.alias(alias, expr);
        }
        for unit in UnitName::all() {
            self.alias(unit.as_str(), unit.token());
        }
        Ok(())
    }

    fn load_table(&mut self, table: &[Definition], dimension: Dimension) -> Result<(), NumberError> {
        let category = dimension.name().unwrap_or("derived");
        for &(token, name, factor, aliases) in table {
            self.insert(Unit::new(token, name, dimension, factor.parse()?, category));
            for alias in aliases {
                self.alias(alias, token);
            }
        }
        Ok(())
    }

    /// Kelvin is the base; celsius and fahrenheit carry offsets
    fn load_temperature(&mut self) -> Result<(), NumberError> {
        let dim = Dimension::TEMPERATURE;
        let five_ninths = Number::from_ratio(5, 9)?;
        let absolute_zero_f: Number = "459.67".parse()?;

        self.insert(Unit::new("K", "kelvin", dim, Number::one(), "temperature"));
        // K = C + 273.15
        self.insert(Unit::with_offset("degC", "celsius", dim, Number::one(), "273.15".parse()?, "temperature"));
        // K = (F + 459.67) * 5/9
        self.insert(Unit::with_offset(
            "degF",
            "fahrenheit",
            dim,
            five_ninths.clone(),
            absolute_zero_f.mul(&five_ninths),
            "temperature",
        ));
        self.insert(Unit::new("degR", "rankine", dim, five_ninths, "temperature"));

        for (alias, token) in [("C", "degC"), ("°C", "degC"), ("F", "degF"), ("°F", "degF"), ("rankine", "degR")] {
            self.alias(alias, token);
        }
        Ok(())
    }

    fn insert(&mut self, unit: Unit) {
        self.units.insert(unit.symbol.clone(), unit);
    }

    fn alias(&mut self, alias: &str, target: &str) {
        self.aliases.insert(alias.to_string(), target.to_string());
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
