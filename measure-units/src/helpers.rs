//! Argument extraction for plugin functions

use measure_core::{MeasureError, Value};

/// Extract a Number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, MeasureError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(MeasureError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a Text string from a Value
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, MeasureError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(e.clone()),
        other => Err(MeasureError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Fail unless at least `expected` arguments were passed
pub fn require_args(args: &[Value], func: &str, expected: usize) -> Result<(), MeasureError> {
    if args.len() < expected {
        return Err(MeasureError::arg_count(func, expected, args.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::codes;

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number(&Value::Number(42.0), "test", "arg"), Ok(42.0));

        let err = extract_number(&Value::Null, "test", "arg").unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_extract_text() {
        let val = Value::Text("meter".to_string());
        assert_eq!(extract_text(&val, "test", "arg"), Ok("meter"));
    }

    #[test]
    fn test_error_passes_through() {
        let upstream = MeasureError::internal("upstream");
        let err = extract_text(&Value::Error(upstream.clone()), "test", "arg").unwrap_err();
        assert_eq!(err, upstream);
    }

    #[test]
    fn test_require_args() {
        assert!(require_args(&[Value::Null], "f", 1).is_ok());
        assert_eq!(require_args(&[], "f", 2).unwrap_err().code, codes::ARG_COUNT);
    }
}
