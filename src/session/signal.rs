//! Serving control signals
//!
//! The `+1` / `-1` / absolute-value events coming from the view.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "action", content = "servings")]
pub enum ServingSignal {
    Increment,
    Decrement,
    /// Absolute serving count; values below 1 are clamped to 1 when applied
    Set(i64),
}

impl ServingSignal {
    /// Parse a control signal from text
    ///
    /// - "+1", "+", "inc", "increment" -> Increment
    /// - "-1", "-", "dec", "decrement" -> Decrement
    /// - an integer such as "6" -> Set(6)
    /// - anything else (e.g. "2.5", "lots") -> Set(1)
    ///
    /// Only exactly one step up or down is relative. Any other signed integer is
    /// an absolute count: "+3" -> Set(3), "-2" -> Set(-2), which clamps to 1 when applied.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.to_lowercase().as_str() {
            "+1" | "+" | "inc" | "increment" => ServingSignal::Increment,
            "-1" | "-" | "dec" | "decrement" => ServingSignal::Decrement,
            _ => match trimmed.parse::<i64>() {
                Ok(n) => ServingSignal::Set(n),
                Err(_) => {
                    tracing::warn!("Unparseable serving count '{}', using 1", trimmed);
                    ServingSignal::Set(1)
                }
            },
        }
    }
}

impl fmt::Display for ServingSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServingSignal::Increment => write!(f, "+1"),
            ServingSignal::Decrement => write!(f, "-1"),
            ServingSignal::Set(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative() {
        assert_eq!(ServingSignal::parse("+1"), ServingSignal::Increment);
        assert_eq!(ServingSignal::parse(" Increment "), ServingSignal::Increment);
        assert_eq!(ServingSignal::parse("-1"), ServingSignal::Decrement);
        assert_eq!(ServingSignal::parse("dec"), ServingSignal::Decrement);
    }

    #[test]
    fn test_parse_absolute() {
        assert_eq!(ServingSignal::parse("6"), ServingSignal::Set(6));
        assert_eq!(ServingSignal::parse("0"), ServingSignal::Set(0));
        assert_eq!(ServingSignal::parse("-3"), ServingSignal::Set(-3));
    }

    #[test]
    fn test_parse_other_signed_values_are_absolute() {
        assert_eq!(ServingSignal::parse("+3"), ServingSignal::Set(3));
        assert_eq!(ServingSignal::parse("-2"), ServingSignal::Set(-2));
        assert_eq!(ServingSignal::parse("+1"), ServingSignal::Increment);
    }

    #[test]
    fn test_parse_garbage_is_one() {
        assert_eq!(ServingSignal::parse("2.5"), ServingSignal::Set(1));
        assert_eq!(ServingSignal::parse("lots"), ServingSignal::Set(1));
        assert_eq!(ServingSignal::parse(""), ServingSignal::Set(1));
    }

    #[test]
    fn test_display_round_trips() {
        for signal in [
            ServingSignal::Increment,
            ServingSignal::Decrement,
            ServingSignal::Set(4),
        ] {
            assert_eq!(ServingSignal::parse(&signal.to_string()), signal);
        }
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(ServingSignal::Set(3)).unwrap();
        assert_eq!(json, serde_json::json!({"action": "set", "servings": 3}));
        let inc: ServingSignal = serde_json::from_str(r#"{"action": "increment"}"#).unwrap();
        assert_eq!(inc, ServingSignal::Increment);
    }
}
