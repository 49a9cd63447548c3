//! Unit conversion functions for Measure

use std::collections::BTreeMap;
use measure_plugin::prelude::*;
use tracing::debug;
use crate::helpers::{extract_number, extract_text, require_args};
use crate::table::UNITS;
use crate::{categories, Category};

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("category", "Text", "Category identifier or label (e.g., \"Length\")"),
    ArgMeta::required("from_unit", "Text", "Source unit (e.g., \"meter\")"),
    ArgMeta::required("to_unit", "Text", "Target unit (e.g., \"foot\")"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(1, \"Length\", \"meter\", \"centimeter\") → 100",
    "convert(100, \"Temperature\", \"celsius\", \"fahrenheit\") → 212",
    "convert(1, \"Weight\", \"kilogram\", \"pound\") → 2.20462",
];

static CONVERT_RELATED: [&str; 2] = ["list_units", "format_result"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a value from one unit to another within a category",
            usage: "convert(value, category, from_unit, to_unit)",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        match run_conversion(args) {
            Ok(n) => Value::Number(n),
            Err(e) => Value::Error(e),
        }
    }
}

fn run_conversion(args: &[Value]) -> Result<f64, MeasureError> {
    require_args(args, "convert", 4)?;
    let value = extract_number(&args[0], "convert", "value")?;
    let category = extract_text(&args[1], "convert", "category")?;
    let from = extract_text(&args[2], "convert", "from_unit")?;
    let to = extract_text(&args[3], "convert", "to_unit")?;

    crate::convert(value, category, from, to).map_err(|e| {
        debug!(error = %e, "conversion rejected");
        MeasureError::from(e)
    })
}

// ============ format_result ============

pub struct FormatResult;

static FORMAT_RESULT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("value", "Number", "Converted value to render"),
];

static FORMAT_RESULT_EXAMPLES: [&str; 2] = [
    "format_result(3.0) → \"3\"",
    "format_result(3.14) → \"3.14\"",
];

static FORMAT_RESULT_RELATED: [&str; 1] = ["convert"];

impl FunctionPlugin for FormatResult {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_result",
            description: "Render a number with six decimals, trailing zeros removed",
            usage: "format_result(value)",
            args: &FORMAT_RESULT_ARGS,
            returns: "Text",
            examples: &FORMAT_RESULT_EXAMPLES,
            category: "units",
            related: &FORMAT_RESULT_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        if args.is_empty() {
            return Value::Error(MeasureError::arg_count("format_result", 1, 0));
        }

        match extract_number(&args[0], "format_result", "value") {
            Ok(n) => Value::Text(format_result(n)),
            Err(e) => Value::Error(e),
        }
    }
}

// ============ list_categories ============

pub struct ListCategories;

static LIST_CATEGORIES_EXAMPLES: [&str; 1] = [
    "list_categories() → [{id: \"Length\", label: \"📏 Length\", ...}, ...]",
];

static LIST_CATEGORIES_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for ListCategories {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_categories",
            description: "List measurement categories with labels and base units",
            usage: "list_categories()",
            args: &[],
            returns: "List",
            examples: &LIST_CATEGORIES_EXAMPLES,
            category: "units",
            related: &LIST_CATEGORIES_RELATED,
        }
    }

    fn call(&self, _args: &[Value]) -> Value {
        Value::List(categories().iter().map(category_to_value).collect())
    }
}

fn category_to_value(category: &Category) -> Value {
    let mut obj = BTreeMap::new();
    obj.insert("id".to_string(), Value::from(category.id()));
    obj.insert("label".to_string(), Value::from(category.label()));
    obj.insert("description".to_string(), Value::from(category.description()));
    obj.insert("base_unit".to_string(),
        UNITS.base_unit(*category).map(Value::from).unwrap_or(Value::Null));
    obj.insert("units".to_string(), Value::List(
        UNITS.names(*category).into_iter().map(Value::from).collect()
    ));
    Value::Object(obj)
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("category", "Text", "Category identifier or label"),
];

static LIST_UNITS_EXAMPLES: [&str; 2] = [
    "list_units(\"Weight\") → [\"kilogram\", \"gram\", \"milligram\", \"pound\", \"ounce\"]",
    "list_units(\"Temperature\") → [\"celsius\", \"fahrenheit\", \"kelvin\"]",
];

static LIST_UNITS_RELATED: [&str; 2] = ["list_categories", "convert"];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "List the units of a category in display order",
            usage: "list_units(category)",
            args: &LIST_UNITS_ARGS,
            returns: "List",
            examples: &LIST_UNITS_EXAMPLES,
            category: "units",
            related: &LIST_UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value]) -> Value {
        if args.is_empty() {
            return Value::Error(MeasureError::arg_count("list_units", 1, 0));
        }

        let name = match extract_text(&args[0], "list_units", "category") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match crate::units(name) {
            Ok(names) => Value::List(names.into_iter().map(Value::from).collect()),
            Err(e) => Value::Error(e.into()),
        }
    }
}
