//! unitconv Units - Physical quantities and unit conversion
//!
//! Provides unit-aware quantities with dimensional analysis over a curated
//! vocabulary. Temperature scales are affine (scale plus offset); every other
//! category converts by the ratio of SI factors.
//!
//! Categories:
//! - Length (meters, kilometers, miles, feet, inches, centimeters)
//! - Weight (kilograms, grams, pounds, ounces)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liters, milliliters, gallons, cups)
//! - Time (seconds, minutes, hours, days)
//! - Speed (meters_per_second, kilometers_per_hour, miles_per_hour)

mod dimension;
mod unit;
mod quantity;
mod names;
mod registry;
mod parse;
mod convert;

pub use dimension::Dimension;
pub use unit::{Unit, ConversionError};
pub use quantity::Quantity;
pub use names::{
    Category, UnitName, LengthUnit, WeightUnit, TemperatureUnit, VolumeUnit, TimeUnit, SpeedUnit,
};
pub use registry::{UnitRegistry, UNITS};
pub use parse::parse_unit;
pub use convert::{convert, convert_units, try_convert, normalize_unit_name, ConversionOutcome};
