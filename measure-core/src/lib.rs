//! Measure Core - Fundamental types
//!
//! This crate provides the core types used throughout Measure:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `MeasureError`: Structured errors for callers and tool clients
//! - `format_result`: The display contract for converted numbers

mod value;
mod error;
mod format;

pub use value::Value;
pub use error::{MeasureError, Severity, codes};
pub use format::{format_result, RESULT_DECIMALS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, MeasureError, Severity, format_result};
    pub use crate::error::codes;
}
