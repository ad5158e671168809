//! Unit conversions
//!
//! Temperature, length and mass conversions between metric and imperial
//! units.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FEET_PER_METER: f64 = 3.28084;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Cannot convert {from} to {to}")]
    Incompatible { from: Unit, to: Unit },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Length,
    Mass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Meter,
    Foot,
    Kilogram,
    Pound,
}

impl Unit {
    pub fn quantity(self) -> Quantity {
        match self {
            Unit::Celsius | Unit::Fahrenheit => Quantity::Temperature,
            Unit::Meter | Unit::Foot => Quantity::Length,
            Unit::Kilogram | Unit::Pound => Quantity::Mass,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Meter => "m",
            Unit::Foot => "ft",
            Unit::Kilogram => "kg",
            Unit::Pound => "lbs",
        }
    }

    /// `value` of this unit expressed in the metric unit of its quantity
    fn metric_value(self, value: f64) -> f64 {
        match self {
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Unit::Foot => value / FEET_PER_METER,
            Unit::Pound => value / POUNDS_PER_KILOGRAM,
            Unit::Celsius | Unit::Meter | Unit::Kilogram => value,
        }
    }

    /// Inverse of `metric_value`
    fn unit_value(self, value: f64) -> f64 {
        match self {
            Unit::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Unit::Foot => value * FEET_PER_METER,
            Unit::Pound => value * POUNDS_PER_KILOGRAM,
            Unit::Celsius | Unit::Meter | Unit::Kilogram => value,
        }
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Unit::Celsius),
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Unit::Meter),
            "ft" | "foot" | "feet" => Ok(Unit::Foot),
            "kg" | "kilogram" | "kilograms" => Ok(Unit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Pound),
            _ => Err(ConvertError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Convert `value` from one unit to another of the same quantity
pub fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, ConvertError> {
    if from.quantity() != to.quantity() {
        return Err(ConvertError::Incompatible { from, to });
    }
    Ok(to.unit_value(from.metric_value(value)))
}
