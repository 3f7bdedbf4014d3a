//! Dual integer/float numeric model
//!
//! Keystrokes without a decimal point produce integers, keystrokes with one
//! produce floats, and division always produces a float. Display follows the
//! same split: floats always show a fractional part (`5.0`), integers never do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Anchored numeric literal: leading digits, optional point, trailing digits.
static LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]*)(\.)?([0-9]*)$").expect("literal pattern is valid"));

/// A calculator value, either an exact integer or a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Number {
    /// Integer zero
    pub const ZERO: Self = Self::Int(0);
    /// Integer one
    pub const ONE: Self = Self::Int(1);

    /// Recognizes a numeric literal.
    ///
    /// Accepts `digits`, `digits.`, `.digits` and `digits.digits`. A literal
    /// whose fractional part is absent or all zeros is an integer, otherwise a
    /// float. Returns `None` for anything else, including the empty string and
    /// a lone point.
    ///
    /// ```
    /// use simple_calculator::core::Number;
    ///
    /// assert_eq!(Number::parse_literal("123.45"), Some(Number::Float(123.45)));
    /// assert_eq!(Number::parse_literal("130.0"), Some(Number::Int(130)));
    /// assert_eq!(Number::parse_literal("130"), Some(Number::Int(130)));
    /// assert_eq!(Number::parse_literal("abc"), None);
    /// ```
    #[must_use]
    pub fn parse_literal(text: &str) -> Option<Self> {
        let caps = LITERAL.captures(text)?;
        let whole = caps.get(1).map_or("", |m| m.as_str());
        let fraction = caps.get(3).map_or("", |m| m.as_str());

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        if fraction.bytes().all(|b| b == b'0') {
            let whole = if whole.is_empty() { "0" } else { whole };
            return Some(Self::parse_integer(whole));
        }

        text.parse::<f64>().ok().map(Self::Float)
    }

    /// Parses an integer digit string, degrading to a float past `i64` range.
    pub(crate) fn parse_integer(digits: &str) -> Self {
        match digits.parse::<i64>() {
            Ok(v) => Self::Int(v),
            Err(_) => Self::Float(digits.parse::<f64>().unwrap_or(f64::INFINITY)),
        }
    }

    /// Returns the value as a float
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Returns true for integer or float zero
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// Returns true if this is the float variant
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Converts a whole-number float into the integer variant.
    ///
    /// Floats with a fractional part, or outside `i64` range, are returned as is.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                Self::Int(v as i64)
            }
            other => other,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Literal recognition =====

    #[test]
    fn test_parse_literal_integer() {
        assert_eq!(Number::parse_literal("250"), Some(Number::Int(250)));
        assert_eq!(Number::parse_literal("007"), Some(Number::Int(7)));
    }

    #[test]
    fn test_parse_literal_float() {
        assert_eq!(Number::parse_literal("123.45"), Some(Number::Float(123.45)));
        assert_eq!(Number::parse_literal(".5"), Some(Number::Float(0.5)));
    }

    #[test]
    fn test_parse_literal_zero_fraction_is_integer() {
        assert_eq!(Number::parse_literal("130.0"), Some(Number::Int(130)));
        assert_eq!(Number::parse_literal("130.000"), Some(Number::Int(130)));
        assert_eq!(Number::parse_literal("130."), Some(Number::Int(130)));
        assert_eq!(Number::parse_literal(".0"), Some(Number::Int(0)));
    }

    #[test]
    fn test_parse_literal_rejects_malformed() {
        assert_eq!(Number::parse_literal(""), None);
        assert_eq!(Number::parse_literal("."), None);
        assert_eq!(Number::parse_literal("abc125"), None);
        assert_eq!(Number::parse_literal("1.2.3"), None);
        assert_eq!(Number::parse_literal("-5"), None);
        assert_eq!(Number::parse_literal(" 5"), None);
        assert_eq!(Number::parse_literal("1e5"), None);
    }

    #[test]
    fn test_parse_literal_huge_integer_degrades_to_float() {
        let n = Number::parse_literal("123456789012345678901234").unwrap();
        assert!(n.is_float());
        assert!(n.as_f64() > 1e23);
    }

    // ===== Predicates =====

    #[test]
    fn test_is_zero() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(!Number::Float(0.1).is_zero());
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Number::Float(8.0).normalized(), Number::Int(8));
        assert_eq!(Number::Float(-3.0).normalized(), Number::Int(-3));
        assert_eq!(Number::Float(2.5).normalized(), Number::Float(2.5));
        assert_eq!(Number::Int(4).normalized(), Number::Int(4));
        assert!(Number::Float(1e30).normalized().is_float());
    }

    // ===== Display =====

    #[test]
    fn test_display_int() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Int(-7).to_string(), "-7");
    }

    #[test]
    fn test_display_float() {
        assert_eq!(Number::Float(5.0).to_string(), "5.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Number::default(), Number::ZERO);
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_string(&Number::Int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Number::Float(2.5)).unwrap(), "2.5");
    }
}
