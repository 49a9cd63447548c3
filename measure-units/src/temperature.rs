//! Temperature scales
//!
//! Celsius, Fahrenheit and Kelvin have different zero points, so they cannot
//! share a single factor table. Each pair has its own closed-form formula
//! instead, and no base scale is used.

use std::fmt;

/// Offset between the Celsius and Kelvin zero points
pub const KELVIN_OFFSET: f64 = 273.15;

/// Offset between the Celsius and Fahrenheit zero points
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        }
    }

    pub fn from_name(name: &str) -> Option<TemperatureScale> {
        TemperatureScale::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Convert a reading on this scale to `target`
    ///
    /// Same-scale pairs, and any pair without a formula below, return the
    /// input unchanged.
    pub fn convert(self, value: f64, target: TemperatureScale) -> f64 {
        use TemperatureScale::*;

        match (self, target) {
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            (Celsius, Kelvin) => value + KELVIN_OFFSET,
            (Fahrenheit, Celsius) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
            (Kelvin, Celsius) => value - KELVIN_OFFSET,
            (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
            _ => value,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
