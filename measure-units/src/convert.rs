//! The conversion engine
//!
//! `convert` is a pure function of its inputs. It reads only the immutable
//! unit table, so it is safe to call from any number of threads at once.

use crate::{Category, ConversionError, TemperatureScale};
use crate::table::UNITS;

/// Convert `value` from one unit to another within a category
///
/// The category may be given by identifier ("Length") or display label
/// ("📏 Length"). Fails with `UnknownCategory`, `UnknownUnit`, or `Overflow`
/// when the result is not a finite number.
pub fn convert(value: f64, category: &str, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let category: Category = category.parse()?;
    convert_in(value, category, from_unit, to_unit)
}

/// `convert` for an already resolved category
pub fn convert_in(value: f64, category: Category, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let result = if category.is_linear() {
        convert_linear(value, category, from_unit, to_unit)?
    } else {
        let from = temperature_scale(category, from_unit)?;
        let to = temperature_scale(category, to_unit)?;
        from.convert(value, to)
    };

    if !result.is_finite() {
        return Err(ConversionError::Overflow {
            category: category.id().to_string(),
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    }

    Ok(result)
}

fn convert_linear(value: f64, category: Category, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    let from_factor = factor_in(category, from_unit)?;
    let to_factor = factor_in(category, to_unit)?;

    // Skip the round trip through the base unit so identity is exact.
    if from_unit == to_unit {
        return Ok(value);
    }

    let base = value / from_factor;
    Ok(base * to_factor)
}

fn temperature_scale(category: Category, unit: &str) -> Result<TemperatureScale, ConversionError> {
    TemperatureScale::from_name(unit).ok_or_else(|| unknown_unit(category, unit))
}

fn factor_in(category: Category, unit: &str) -> Result<f64, ConversionError> {
    UNITS.factor(category, unit).ok_or_else(|| unknown_unit(category, unit))
}

fn unknown_unit(category: Category, unit: &str) -> ConversionError {
    ConversionError::UnknownUnit {
        category: category.id().to_string(),
        unit: unit.to_string(),
    }
}

/// Factor of a linear unit relative to its category's base unit
///
/// Temperature scales have no factor and report `UnknownUnit`.
pub fn factor(category: &str, unit: &str) -> Result<f64, ConversionError> {
    let category: Category = category.parse()?;
    factor_in(category, unit)
}

/// All categories in listing order
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Unit names of a category in listing order
pub fn units(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    let category: Category = category.parse()?;
    Ok(UNITS.names(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * a.abs().max(b.abs())
    }

    #[test]
    fn test_meter_to_centimeter() {
        assert_eq!(convert(1.0, "Length", "meter", "centimeter").unwrap(), 100.0);
    }

    #[test]
    fn test_kilogram_to_pound() {
        let lb = convert(1.0, "Weight", "kilogram", "pound").unwrap();
        assert!(approx_eq(lb, 2.20462, 1e-9));
    }

    #[test]
    fn test_hours_to_minutes() {
        let minutes = convert(2.0, "Time", "hour", "minute").unwrap();
        assert!(approx_eq(minutes, 120.0, 1e-12));
    }

    #[test]
    fn test_label_accepted_as_category() {
        assert_eq!(convert(1.0, "🧪 Volume", "liter", "milliliter").unwrap(), 1000.0);
    }

    #[test]
    fn test_temperature_exactness() {
        assert_eq!(convert(0.0, "Temperature", "celsius", "fahrenheit").unwrap(), 32.0);
        assert_eq!(convert(100.0, "Temperature", "celsius", "fahrenheit").unwrap(), 212.0);
        assert_eq!(convert(0.0, "Temperature", "celsius", "kelvin").unwrap(), 273.15);
        assert_eq!(convert(32.0, "Temperature", "fahrenheit", "celsius").unwrap(), 0.0);
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(1.0, "Length", "lightyear", "meter").unwrap_err();
        assert_eq!(err, ConversionError::UnknownUnit {
            category: "Length".to_string(),
            unit: "lightyear".to_string(),
        });

        let err = convert(1.0, "Length", "meter", "kilogram").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { ref unit, .. } if unit == "kilogram"));
    }

    #[test]
    fn test_unknown_temperature_scale() {
        let err = convert(1.0, "Temperature", "rankine", "celsius").unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    }

    #[test]
    fn test_unknown_category() {
        let err = convert(1.0, "Bogus", "x", "y").unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("Bogus".to_string()));
    }

    #[test]
    fn test_identity_is_exact() {
        let values = [0.0, -3.75, 1.0 / 3.0, 123456.789, 1e-9];
        for category in categories() {
            for unit in UNITS.names(*category) {
                for v in values {
                    assert_eq!(convert_in(v, *category, unit, unit).unwrap(), v, "{} {}", category, unit);
                }
            }
        }
    }

    #[test]
    fn test_linear_round_trip() {
        let values = [0.001, 1.0, 2.5, 1234.5678, 1e9];
        for category in categories().iter().filter(|c| c.is_linear()) {
            let names = UNITS.names(*category);
            for a in &names {
                for b in &names {
                    for v in values {
                        let there = convert_in(v, *category, a, b).unwrap();
                        let back = convert_in(there, *category, b, a).unwrap();
                        assert!(approx_eq(back, v, 1e-6), "{} {} -> {} -> {}: {}", v, a, b, a, back);
                    }
                }
            }
        }
    }

    #[test]
    fn test_conversion_to_base_unit() {
        for category in categories().iter().filter(|c| c.is_linear()) {
            let base = UNITS.base_unit(*category).unwrap();
            for unit in UNITS.linear_units(*category) {
                let v = 42.5;
                assert_eq!(convert_in(v, *category, unit.name, base).unwrap(), v / unit.factor);
            }
        }
    }

    #[test]
    fn test_temperature_round_trip() {
        for from in TemperatureScale::ALL {
            for to in TemperatureScale::ALL {
                let there = convert(36.6, "Temperature", from.name(), to.name()).unwrap();
                let back = convert(there, "Temperature", to.name(), from.name()).unwrap();
                assert!(approx_eq(back, 36.6, 1e-9));
            }
        }
    }

    #[test]
    fn test_negative_and_zero_values() {
        assert_eq!(convert(0.0, "Length", "mile", "inch").unwrap(), 0.0);
        assert_eq!(convert(-1.0, "Length", "kilometer", "meter").unwrap(), -1000.0);
    }

    #[test]
    fn test_overflow() {
        let err = convert(f64::MAX, "Weight", "kilogram", "milligram").unwrap_err();
        assert!(matches!(err, ConversionError::Overflow { .. }));
    }

    #[test]
    fn test_factor() {
        assert_eq!(factor("Length", "centimeter").unwrap(), 100.0);
        assert!(matches!(factor("Temperature", "celsius"), Err(ConversionError::UnknownUnit { .. })));
        assert!(matches!(factor("Bogus", "x"), Err(ConversionError::UnknownCategory(_))));
    }

    #[test]
    fn test_units_listing() {
        assert_eq!(units("Time").unwrap(), vec!["second", "minute", "hour", "day", "week"]);
        assert!(units("Bogus").is_err());
    }
}
