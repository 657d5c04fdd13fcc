//! Ingredient line scaling
//!
//! Rescales the leading quantity of a free-text ingredient line such as
//! "200g tofu" while keeping the unit and ingredient name untouched.

use super::amount::{format_amount, split_leading_number};

/// Result of looking for a leading quantity in an ingredient line
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuantity {
    /// A leading number was found; `remainder` is the rest of the trimmed line verbatim
    Matched { amount: f64, remainder: String },
    /// The line has no leading number (e.g. "salt to taste")
    Unmatched,
}

/// Parse the leading quantity of an ingredient line
pub fn parse_quantity(line: &str) -> ParsedQuantity {
    match split_leading_number(line.trim()) {
        Some((number, remainder)) => match number.parse::<f64>() {
            Ok(amount) => ParsedQuantity::Matched {
                amount,
                remainder: remainder.to_string(),
            },
            Err(_) => ParsedQuantity::Unmatched,
        },
        None => ParsedQuantity::Unmatched,
    }
}

/// Scale the leading quantity of an ingredient line by `factor`
///
/// Lines without a leading number are returned unchanged. The unit suffix stays
/// attached exactly as written, so "200g tofu" at 1.5x becomes "300g tofu" and
/// "1.5 cups water" at 2x becomes "3 cups water".
pub fn scale_ingredient_line(line: &str, factor: f64) -> String {
    match parse_quantity(line) {
        ParsedQuantity::Matched { amount, remainder } => {
            format!("{}{}", format_amount(amount * factor), remainder)
        }
        ParsedQuantity::Unmatched => line.to_string(),
    }
}

/// Scale every line of an ingredient list, preserving order
pub fn scale_ingredient_lines(lines: &[String], factor: f64) -> Vec<String> {
    lines
        .iter()
        .map(|line| scale_ingredient_line(line, factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_attached_unit() {
        assert_eq!(scale_ingredient_line("200g tofu", 1.5), "300g tofu");
    }

    #[test]
    fn test_scale_spaced_unit() {
        assert_eq!(scale_ingredient_line("1.5 cups water", 2.0), "3 cups water");
        assert_eq!(scale_ingredient_line("2 eggs", 0.5), "1 eggs");
    }

    #[test]
    fn test_pass_through_without_quantity() {
        assert_eq!(scale_ingredient_line("salt to taste", 2.0), "salt to taste");
        // Untrimmed original is returned as-is
        assert_eq!(scale_ingredient_line("  pinch of salt ", 3.0), "  pinch of salt ");
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(scale_ingredient_line("3", 2.0), "6");
        assert_eq!(scale_ingredient_line("  4  ", 0.5), "2");
    }

    #[test]
    fn test_fractional_results() {
        assert_eq!(scale_ingredient_line("1 cup flour", 1.0 / 3.0), "0.33 cup flour");
        assert_eq!(scale_ingredient_line("5 tbsp oil", 0.5), "2.5 tbsp oil");
    }

    #[test]
    fn test_factor_one_keeps_line() {
        assert_eq!(scale_ingredient_line("3g", 1.0), "3g");
        assert_eq!(scale_ingredient_line("2.5 cups milk", 1.0), "2.5 cups milk");
    }

    #[test]
    fn test_non_finite_factor() {
        assert_eq!(scale_ingredient_line("1 cup", f64::INFINITY), "inf cup");
        assert_eq!(scale_ingredient_line("1 cup", f64::NEG_INFINITY), "-inf cup");
        assert_eq!(scale_ingredient_line("0 cup", f64::INFINITY), "NaN cup");
        assert_eq!(scale_ingredient_line("salt", f64::NAN), "salt");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(
            parse_quantity(" 1.5 cups water"),
            ParsedQuantity::Matched {
                amount: 1.5,
                remainder: " cups water".to_string()
            }
        );
        assert_eq!(parse_quantity("a handful of basil"), ParsedQuantity::Unmatched);
    }

    #[test]
    fn test_scale_ingredient_lines_keeps_order() {
        let lines = vec![
            "200g tofu".to_string(),
            "salt to taste".to_string(),
            "2 tbsp soy sauce".to_string(),
        ];
        assert_eq!(
            scale_ingredient_lines(&lines, 2.0),
            vec!["400g tofu", "salt to taste", "4 tbsp soy sauce"]
        );
    }
}
