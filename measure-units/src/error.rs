//! Errors that can occur during unit conversion

use measure_core::MeasureError;
use thiserror::Error;

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Category identifier not present in the table
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Unit name not present under the given category
    #[error("unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: String, unit: String },

    /// Result is outside the representable range
    #[error("converting {from} to {to} in {category} left the representable range")]
    Overflow { category: String, from: String, to: String },
}

impl From<ConversionError> for MeasureError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::UnknownCategory(name) => MeasureError::unknown_category(&name),
            ConversionError::UnknownUnit { category, unit } => MeasureError::unknown_unit(&category, &unit),
            e @ ConversionError::Overflow { .. } => MeasureError::overflow(e.to_string()),
        }
    }
}
