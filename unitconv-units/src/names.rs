//! The curated unit vocabulary: categories and closed unit enumerations
//!
//! Each category has its own enum. `UnitName` wraps them and maps every
//! member to the registry token it resolves to, so a new unit cannot be added
//! to a category without also saying how the unit system spells it.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use crate::Dimension;
use crate::unit::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
    Inches,
    Centimeters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Kilograms,
    Grams,
    Pounds,
    Ounces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Liters,
    Milliliters,
    Gallons,
    Cups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

/// Any unit of the curated vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitName {
    Length(LengthUnit),
    Weight(WeightUnit),
    Temperature(TemperatureUnit),
    Volume(VolumeUnit),
    Time(TimeUnit),
    Speed(SpeedUnit),
}

impl UnitName {
    /// The registry token this unit resolves to
    pub fn token(self) -> &'static str {
        match self {
            UnitName::Length(u) => match u {
                LengthUnit::Meters => "m",
                LengthUnit::Kilometers => "km",
                LengthUnit::Miles => "mi",
                LengthUnit::Feet => "ft",
                LengthUnit::Inches => "in",
                LengthUnit::Centimeters => "cm",
            },
            UnitName::Weight(u) => match u {
                WeightUnit::Kilograms => "kg",
                WeightUnit::Grams => "g",
                WeightUnit::Pounds => "lb",
                WeightUnit::Ounces => "oz",
            },
            UnitName::Temperature(u) => match u {
                TemperatureUnit::Celsius => "degC",
                TemperatureUnit::Fahrenheit => "degF",
                TemperatureUnit::Kelvin => "K",
            },
            UnitName::Volume(u) => match u {
                VolumeUnit::Liters => "L",
                VolumeUnit::Milliliters => "mL",
                VolumeUnit::Gallons => "gal",
                VolumeUnit::Cups => "cup",
            },
            UnitName::Time(u) => match u {
                TimeUnit::Seconds => "s",
                TimeUnit::Minutes => "min",
                TimeUnit::Hours => "h",
                TimeUnit::Days => "d",
            },
            UnitName::Speed(u) => match u {
                SpeedUnit::MetersPerSecond => "m/s",
                SpeedUnit::KilometersPerHour => "km/h",
                SpeedUnit::MilesPerHour => "mph",
            },
        }
    }

    /// The vocabulary name, e.g. "meters_per_second"
    pub fn as_str(self) -> &'static str {
        match self {
            UnitName::Length(u) => u.into(),
            UnitName::Weight(u) => u.into(),
            UnitName::Temperature(u) => u.into(),
            UnitName::Volume(u) => u.into(),
            UnitName::Time(u) => u.into(),
            UnitName::Speed(u) => u.into(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            UnitName::Length(_) => Category::Length,
            UnitName::Weight(_) => Category::Weight,
            UnitName::Temperature(_) => Category::Temperature,
            UnitName::Volume(_) => Category::Volume,
            UnitName::Time(_) => Category::Time,
            UnitName::Speed(_) => Category::Speed,
        }
    }

    /// Every unit of every category, in catalog order
    pub fn all() -> impl Iterator<Item = UnitName> {
        Category::iter().flat_map(|c| c.units())
    }
}

impl FromStr for UnitName {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitName::all()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UnitName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UnitName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Conversion category, as offered in the category selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
    Speed,
}

impl Category {
    /// All categories in selector order
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// The ordered units of this category
    pub fn units(self) -> Vec<UnitName> {
        match self {
            Category::Length => LengthUnit::iter().map(UnitName::Length).collect(),
            Category::Weight => WeightUnit::iter().map(UnitName::Weight).collect(),
            Category::Temperature => TemperatureUnit::iter().map(UnitName::Temperature).collect(),
            Category::Volume => VolumeUnit::iter().map(UnitName::Volume).collect(),
            Category::Time => TimeUnit::iter().map(UnitName::Time).collect(),
            Category::Speed => SpeedUnit::iter().map(UnitName::Speed).collect(),
        }
    }

    pub fn contains(self, unit: UnitName) -> bool {
        unit.category() == self
    }

    /// Resolve a vocabulary name within this category only
    pub fn unit_named(self, name: &str) -> Option<UnitName> {
        name.parse::<UnitName>().ok().filter(|u| self.contains(*u))
    }

    /// The physical dimension shared by every unit in the category
    pub fn dimension(self) -> Dimension {
        match self {
            Category::Length => Dimension::LENGTH,
            Category::Weight => Dimension::MASS,
            Category::Temperature => Dimension::TEMPERATURE,
            Category::Volume => Dimension::VOLUME,
            Category::Time => Dimension::TIME,
            Category::Speed => Dimension::VELOCITY,
        }
    }
}
