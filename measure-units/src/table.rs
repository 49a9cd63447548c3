//! Unit tables for every category
//!
//! Linear categories map each unit to a factor F such that
//! `value_in_unit = value_in_base * F`; the base unit has factor 1.
//! Every factor must stay strictly positive and finite: `convert` divides
//! by them without checking.

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, TemperatureScale};

/// Global unit table, built on first use and never mutated
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// A unit of a linear category with its factor relative to the base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearUnit {
    pub name: &'static str,
    pub factor: f64,
}

/// Table of all known units, grouped by category
pub struct UnitTable {
    linear: HashMap<Category, Vec<LinearUnit>>,
}

impl UnitTable {
    fn new() -> Self {
        let mut table = UnitTable {
            linear: HashMap::new(),
        };
        table.register_all_units();
        table
    }

    /// Factor of a unit in a linear category
    pub fn factor(&self, category: Category, unit: &str) -> Option<f64> {
        self.linear.get(&category)?
            .iter()
            .find(|u| u.name == unit)
            .map(|u| u.factor)
    }

    /// Linear units of a category in listing order (empty for temperature)
    pub fn linear_units(&self, category: Category) -> &[LinearUnit] {
        self.linear.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Unit names of a category in listing order
    pub fn names(&self, category: Category) -> Vec<&'static str> {
        if category.is_linear() {
            self.linear_units(category).iter().map(|u| u.name).collect()
        } else {
            TemperatureScale::ALL.iter().map(|s| s.name()).collect()
        }
    }

    /// The unit with factor 1 (none for temperature)
    pub fn base_unit(&self, category: Category) -> Option<&'static str> {
        self.linear_units(category)
            .iter()
            .find(|u| u.factor == 1.0)
            .map(|u| u.name)
    }

    fn register(&mut self, category: Category, name: &'static str, factor: f64) {
        debug_assert!(factor.is_finite() && factor > 0.0, "bad factor for {}: {}", name, factor);
        self.linear.entry(category).or_default().push(LinearUnit { name, factor });
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_volume_units();
        self.register_time_units();
    }

    fn register_length_units(&mut self) {
        // base: meter
        self.register(Category::Length, "meter", 1.0);
        self.register(Category::Length, "kilometer", 0.001);
        self.register(Category::Length, "centimeter", 100.0);
        self.register(Category::Length, "millimeter", 1000.0);
        self.register(Category::Length, "mile", 0.000621371);
        self.register(Category::Length, "yard", 1.09361);
        self.register(Category::Length, "foot", 3.28084);
        self.register(Category::Length, "inch", 39.3701);
    }

    fn register_weight_units(&mut self) {
        // base: kilogram
        self.register(Category::Weight, "kilogram", 1.0);
        self.register(Category::Weight, "gram", 1000.0);
        self.register(Category::Weight, "milligram", 1_000_000.0);
        self.register(Category::Weight, "pound", 2.20462);
        self.register(Category::Weight, "ounce", 35.274);
    }

    fn register_volume_units(&mut self) {
        // base: liter
        self.register(Category::Volume, "liter", 1.0);
        self.register(Category::Volume, "milliliter", 1000.0);
        self.register(Category::Volume, "cubic meter", 0.001);
        self.register(Category::Volume, "cubic foot", 0.0353147);
        self.register(Category::Volume, "gallon", 0.264172);
        self.register(Category::Volume, "quart", 1.05669);
        self.register(Category::Volume, "pint", 2.11338);
    }

    fn register_time_units(&mut self) {
        // base: second
        self.register(Category::Time, "second", 1.0);
        self.register(Category::Time, "minute", 1.0 / 60.0);
        self.register(Category::Time, "hour", 1.0 / 3600.0);
        self.register(Category::Time, "day", 1.0 / 86400.0);
        self.register(Category::Time, "week", 1.0 / 604800.0);
    }
}
