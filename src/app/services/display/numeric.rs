//! Numeric display formatting

use crate::constants::PLACEHOLDER;

/// Format a raw cell value with at most `precision` fractional digits
///
/// Trailing fractional zeros are dropped and no digit grouping is applied.
/// Missing, empty, non-numeric and non-finite values render as the
/// placeholder glyph.
pub fn format_numeric(value: Option<&str>, precision: usize) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return PLACEHOLDER.to_string();
    };

    match raw.parse::<f64>() {
        Ok(number) if number.is_finite() => format_fixed(number, precision),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Round to `precision` digits and strip insignificant zeros
fn format_fixed(number: f64, precision: usize) -> String {
    let mut formatted = match round_half_away(number, precision) {
        Some(rounded) => format!("{:.*}", precision, rounded),
        None => format!("{:.*}", precision, number),
    };

    if formatted.contains('.') {
        let trimmed_len = formatted.trim_end_matches('0').trim_end_matches('.').len();
        formatted.truncate(trimmed_len);
    }

    // Values that round to zero keep no sign
    if formatted == "-0" {
        formatted = "0".to_string();
    }

    formatted
}

/// Resolve an exact halfway value away from zero
///
/// `format!` rounds exact ties to the even digit; every other value is
/// already correctly rounded by it. Returns `None` unless `number` lies
/// exactly halfway between two `precision`-digit decimals.
fn round_half_away(number: f64, precision: usize) -> Option<f64> {
    if precision > MAX_EXACT_SCALE_DIGITS {
        return None;
    }

    let scale = 10f64.powi(precision as i32);
    let scaled = number * scale;

    // Only an exact product can be an exact tie
    if number.mul_add(scale, -scaled) != 0.0 || scaled.fract().abs() != 0.5 {
        return None;
    }

    Some(scaled.round() / scale)
}

/// Largest power of ten exactly representable as an f64
const MAX_EXACT_SCALE_DIGITS: usize = 22;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_render_placeholder() {
        assert_eq!(format_numeric(None, 2), "—");
        assert_eq!(format_numeric(Some(""), 2), "—");
        assert_eq!(format_numeric(Some("   "), 2), "—");
    }

    #[test]
    fn test_non_numeric_values_render_placeholder() {
        assert_eq!(format_numeric(Some("CONFIRMED"), 2), "—");
        assert_eq!(format_numeric(Some("12abc"), 2), "—");
        assert_eq!(format_numeric(Some("inf"), 2), "—");
        assert_eq!(format_numeric(Some("NaN"), 2), "—");
    }

    #[test]
    fn test_integer_precision() {
        assert_eq!(format_numeric(Some("5821"), 0), "5821");
        assert_eq!(format_numeric(Some("5821.7"), 0), "5822");
        assert_eq!(format_numeric(Some("5821.2"), 0), "5821");
        assert_eq!(format_numeric(Some("2.5"), 0), "3");
        assert_eq!(format_numeric(Some("0.5"), 0), "1");
        assert_eq!(format_numeric(Some("793.5"), 0), "794");
    }

    #[test]
    fn test_fractional_precision_is_a_maximum() {
        assert_eq!(format_numeric(Some("9.488035570"), 3), "9.488");
        assert_eq!(format_numeric(Some("2.26"), 2), "2.26");
        assert_eq!(format_numeric(Some("2.5"), 3), "2.5");
        assert_eq!(format_numeric(Some("1.0000"), 2), "1");
        assert_eq!(format_numeric(Some("615.8"), 1), "615.8");
    }

    #[test]
    fn test_no_digit_grouping() {
        assert_eq!(format_numeric(Some("1234567.891"), 1), "1234567.9");
    }

    #[test]
    fn test_negative_and_signed_values() {
        assert_eq!(format_numeric(Some("-0.26"), 1), "-0.3");
        assert_eq!(format_numeric(Some("-0.004"), 2), "0");
        assert_eq!(format_numeric(Some("-12.6"), 0), "-13");
        assert_eq!(format_numeric(Some("+4.20"), 2), "4.2");
        assert_eq!(format_numeric(Some("-2.5"), 0), "-3");
        assert_eq!(format_numeric(Some("-0.5"), 0), "-1");
    }

    #[test]
    fn test_fractional_ties_round_away_from_zero() {
        assert_eq!(format_numeric(Some("0.125"), 2), "0.13");
        assert_eq!(format_numeric(Some("1.0625"), 3), "1.063");
        assert_eq!(format_numeric(Some("-0.375"), 2), "-0.38");
        // 2.675 is stored just below the halfway point
        assert_eq!(format_numeric(Some("2.675"), 2), "2.67");
    }

    #[test]
    fn test_exponent_and_whitespace() {
        assert_eq!(format_numeric(Some(" 1.5e3 "), 0), "1500");
    }
}
