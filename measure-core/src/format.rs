//! Display formatting for converted numbers

/// Number of decimal digits rendered before trailing zeros are stripped
pub const RESULT_DECIMALS: usize = 6;

/// Render a result with six decimals, then drop trailing zeros and a
/// dangling decimal point.
///
/// `3.0` renders as `"3"`, `3.5` as `"3.5"`.
///
/// Deliberate deviation: plain fixed-point formatting followed by stripping
/// turns values that round to zero from below (`-0.0`, `-0.0000001`) into
/// `"-0"`. This function normalizes them to `"0"` instead.
pub fn format_result(value: f64) -> String {
    let fixed = format!("{:.*}", RESULT_DECIMALS, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_number() {
        assert_eq!(format_result(3.0), "3");
        assert_eq!(format_result(100.0), "100");
        assert_eq!(format_result(0.0), "0");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(format_result(3.5), "3.5");
        assert_eq!(format_result(3.14), "3.14");
        assert_eq!(format_result(273.15), "273.15");
    }

    #[test]
    fn test_rounds_to_six_places() {
        assert_eq!(format_result(2.204620000001), "2.20462");
        assert_eq!(format_result(1.0 / 3.0), "0.333333");
        assert_eq!(format_result(0.0000004), "0");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_result(-40.0), "-40");
        assert_eq!(format_result(-17.5), "-17.5");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_result(-0.0000001), "0");
        assert_eq!(format_result(-0.0000004), "0");
        assert_eq!(format_result(-0.000001), "-0.000001");
    }

    #[test]
    fn test_large_value_keeps_integer_zeros() {
        assert_eq!(format_result(1000000.0), "1000000");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }
}
