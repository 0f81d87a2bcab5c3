//! Display text <-> number conversion
//!
//! Parsing never fails: text without a numeric prefix reads as zero.

/// Text shown for non-finite values
pub const ERROR_TEXT: &str = "Error";

/// Magnitudes above this switch to scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e10;

/// Non-zero magnitudes below this switch to scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-10;

/// Fractional digits in scientific notation
pub const SCIENTIFIC_DIGITS: usize = 6;

/// Decimal places kept for ordinary fractions
pub const FIXED_DECIMALS: usize = 10;

/// Parses display text into a number
///
/// Reads the longest decimal prefix (optional sign, digits, fraction and
/// exponent) after leading whitespace, so `"5)"` reads as 5 and `"(5"` as 0.
#[must_use]
pub fn parse(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let end = numeric_prefix_len(trimmed);
    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

/// Formats a number as canonical display text
#[must_use]
pub fn format(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude > SCIENTIFIC_UPPER || magnitude < SCIENTIFIC_LOWER {
        return to_exponential(value, SCIENTIFIC_DIGITS);
    }

    if value.fract() == 0.0 {
        return format!("{value}");
    }

    let fixed = format!("{value:.prec$}", prec = FIXED_DECIMALS);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Scientific notation with an explicitly signed exponent (`1.500000e+11`)
#[must_use]
pub fn to_exponential(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if exponent.starts_with('-') => {
            format!("{mantissa}e{exponent}")
        }
        Some((mantissa, exponent)) => format!("{mantissa}e+{exponent}"),
        None => raw,
    }
}

/// Fits display text into `width` characters
///
/// Long numeric text without an exponent is shown in scientific notation;
/// everything else (messages, short or already-scientific text) is unchanged.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.chars().count() <= width || text.contains('e') {
        return text.to_string();
    }
    let trimmed = text.trim_start();
    if numeric_prefix_len(trimmed) == 0 {
        return text.to_string();
    }
    to_exponential(parse(trimmed), SCIENTIFIC_DIGITS)
}

/// Length in bytes of the decimal number at the start of `s` (0 if none)
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits + (frac_end - frac_start) > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== parse tests =====

    #[test]
    fn test_parse_integer_and_decimal() {
        assert_eq!(parse("42"), 42.0);
        assert_eq!(parse("12.5"), 12.5);
        assert_eq!(parse("-3.25"), -3.25);
    }

    #[test]
    fn test_parse_trailing_point() {
        assert_eq!(parse("3."), 3.0);
        assert_eq!(parse("0."), 0.0);
    }

    #[test]
    fn test_parse_leading_point() {
        assert_eq!(parse(".5"), 0.5);
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse("1.500000e+11"), 1.5e11);
        assert_eq!(parse("2.000000e-11"), 2e-11);
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("."), 0.0);
        assert_eq!(parse("-"), 0.0);
        assert_eq!(parse("abc"), 0.0);
        assert_eq!(parse("(5"), 0.0);
        assert_eq!(parse("Division by zero"), 0.0);
        assert_eq!(parse("Error"), 0.0);
    }

    #[test]
    fn test_parse_reads_numeric_prefix() {
        assert_eq!(parse("5)"), 5.0);
        assert_eq!(parse("12(3"), 12.0);
        assert_eq!(parse("1e"), 1.0);
        assert_eq!(parse("1.5.2"), 1.5);
    }

    #[test]
    fn test_parse_skips_leading_whitespace() {
        assert_eq!(parse("  7"), 7.0);
    }

    // ===== format tests =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format(42.0), "42");
        assert_eq!(format(-5.0), "-5");
        assert_eq!(format(1e10), "10000000000");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format(0.0), "0");
        assert_eq!(format(-0.0), "0");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format(3.5), "3.5");
        assert_eq!(format(0.125), "0.125");
        assert_eq!(format(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_rounds_to_ten_places() {
        assert_eq!(format(1.0 / 3.0), "0.3333333333");
        assert_eq!(format(2.0 / 3.0), "0.6666666667");
        assert_eq!(format(2.999_999_999_999), "3");
    }

    #[test]
    fn test_format_smallest_fixed_value() {
        assert_eq!(format(1e-10), "0.0000000001");
    }

    #[test]
    fn test_format_large_is_scientific() {
        assert_eq!(format(1.5e11), "1.500000e+11");
        assert_eq!(format(-123_456_789_012.0), "-1.234568e+11");
    }

    #[test]
    fn test_format_tiny_is_scientific() {
        assert_eq!(format(5e-11), "5.000000e-11");
        assert_eq!(format(-2.5e-12), "-2.500000e-12");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format(f64::NAN), ERROR_TEXT);
        assert_eq!(format(f64::INFINITY), ERROR_TEXT);
        assert_eq!(format(f64::NEG_INFINITY), ERROR_TEXT);
    }

    #[test]
    fn test_to_exponential_zero() {
        assert_eq!(to_exponential(0.0, 6), "0.000000e+0");
    }

    // ===== fit_to_width tests =====

    #[test]
    fn test_fit_short_text_unchanged() {
        assert_eq!(fit_to_width("12345", 12), "12345");
        assert_eq!(fit_to_width("123456789012", 12), "123456789012");
    }

    #[test]
    fn test_fit_long_number_goes_scientific() {
        assert_eq!(fit_to_width("1234567890123", 12), "1.234568e+12");
    }

    #[test]
    fn test_fit_keeps_scientific_text() {
        assert_eq!(fit_to_width("1.500000e+11", 10), "1.500000e+11");
    }

    #[test]
    fn test_fit_keeps_messages() {
        assert_eq!(fit_to_width("Calculator Off", 12), "Calculator Off");
        assert_eq!(fit_to_width("((((((((((((((", 12), "((((((((((((((");
    }

    // ===== Property-based tests =====

    proptest! {
        #[test]
        fn prop_format_parse_idempotent(x in -1e9f64..1e9f64) {
            let once = format(x);
            prop_assert_eq!(format(parse(&once)), once);
        }

        #[test]
        fn prop_integers_round_trip(n in -9_999_999_999i64..9_999_999_999i64) {
            let text = format(n as f64);
            prop_assert_eq!(text.clone(), n.to_string());
            prop_assert_eq!(parse(&text), n as f64);
        }

        #[test]
        fn prop_format_never_empty(x in any::<f64>()) {
            prop_assert!(!format(x).is_empty());
        }

        #[test]
        fn prop_parse_never_panics(s in ".*") {
            let _ = parse(&s);
        }
    }
}
