//! Measure Units - Unit Conversion Engine
//!
//! Converts a value between units of one measurement category.
//!
//! Categories:
//! - Length (meter, kilometer, mile, foot, ...)
//! - Weight (kilogram, gram, pound, ounce, ...)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liter, milliliter, gallon, pint, ...)
//! - Time (second, minute, hour, day, week)
//!
//! Linear categories go through a base unit using per-unit factors.
//! Temperature uses closed-form formulas per scale pair.

mod category;
mod temperature;
mod table;
mod error;
mod convert;
mod helpers;
mod functions;

pub use category::Category;
pub use temperature::TemperatureScale;
pub use table::{LinearUnit, UnitTable, UNITS};
pub use error::ConversionError;
pub use convert::{convert, convert_in, factor, categories, units};

use measure_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        .with_function(functions::Convert)
        .with_function(functions::FormatResult)
        .with_function(functions::ListCategories)
        .with_function(functions::ListUnits)
}

/// Create registry with the unit library loaded
pub fn units_registry() -> PluginRegistry {
    load_units_library(PluginRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::Value;

    #[test]
    fn test_load_units_library() {
        let registry = units_registry();

        assert!(registry.get_function("convert").is_some());
        assert!(registry.get_function("format_result").is_some());
        assert!(registry.get_function("list_categories").is_some());
        assert!(registry.get_function("list_units").is_some());
    }

    #[test]
    fn test_convert_through_registry() {
        let registry = units_registry();
        let result = registry.call_function("convert", &[
            Value::Number(0.0),
            Value::from("Temperature"),
            Value::from("celsius"),
            Value::from("fahrenheit"),
        ]);
        assert_eq!(result, Value::Number(32.0));
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|i| std::thread::spawn(move || convert(i as f64, "Length", "kilometer", "meter")))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), i as f64 * 1000.0);
        }
    }
}
