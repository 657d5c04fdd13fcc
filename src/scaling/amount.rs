//! Numeric amount helpers
//!
//! Leading-number extraction and the 2-decimal rounding/normalization shared by
//! the ingredient and macro scalers.

/// Number of decimal places kept after scaling
pub const DECIMAL_PLACES: usize = 2;

/// Split a leading unsigned number (`digits` or `digits.digits`) off the start of `text`
///
/// Returns the numeric token and everything after it, verbatim.
///
/// Examples:
/// - "200g tofu" -> Some(("200", "g tofu"))
/// - "1.5 cups water" -> Some(("1.5", " cups water"))
/// - "1. cup" -> Some(("1", ". cup"))
/// - "salt to taste" -> None
pub fn split_leading_number(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return None;
    }

    // A decimal point only belongs to the number when digits follow it
    let mut end = int_len;
    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            end = int_len + 1 + frac_len;
        }
    }

    Some(text.split_at(end))
}

/// Render `value` with exactly two decimals
///
/// The exact binary value is rounded; ties (only possible for multiples of 1/8)
/// go away from zero.
fn to_fixed(value: f64) -> String {
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return format!("{:.*}", DECIMAL_PLACES, scaled.round() / 100.0);
    }
    format!("{:.*}", DECIMAL_PLACES, value)
}

/// Round to two decimals and drop insignificant trailing zeros
///
/// `3.00 -> "3"`, `2.50 -> "2.5"`, `2.333 -> "2.33"`. Never yields `"-0"`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = to_fixed(value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
