//! Operand entry: turns keystrokes into a number

use crate::core::Number;

/// A keystroke accepted by [`NumberBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitToken {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Point,
}

impl DigitToken {
    /// Creates a digit token, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Parses a keystroke character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            _ => c.to_digit(10).map(|d| Self::Digit(d as u8)),
        }
    }

    /// Parses a single-character token string
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Returns the character this token appends
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::Point => '.',
        }
    }
}

/// Accumulates keystrokes into an integer or decimal number.
///
/// At most one decimal point is ever present; a second one is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberBuilder {
    digits: String,
    has_decimal: bool,
}

impl NumberBuilder {
    /// Creates an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit or the decimal point.
    ///
    /// Returns false if the token was dropped (a second decimal point).
    pub fn append(&mut self, token: DigitToken) -> bool {
        if token == DigitToken::Point {
            if self.has_decimal {
                return false;
            }
            self.has_decimal = true;
        }
        self.digits.push(token.as_char());
        true
    }

    /// Returns the current numeric value.
    ///
    /// Empty input is zero. Without a decimal point the digits are an integer,
    /// with one they are a float (a lone point reads as `0.0`).
    #[must_use]
    pub fn value(&self) -> Number {
        if self.digits.is_empty() {
            return Number::ZERO;
        }
        if self.has_decimal {
            Number::Float(self.digits.parse::<f64>().unwrap_or(0.0))
        } else {
            Number::parse_integer(&self.digits)
        }
    }

    /// Returns the raw accumulated text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.digits
    }

    /// Returns true if a decimal point has been entered
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.has_decimal
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Resets to empty
    pub fn clear(&mut self) {
        self.digits.clear();
        self.has_decimal = false;
    }

    /// Re-seeds from a numeric literal.
    ///
    /// An empty string clears the builder. A malformed literal leaves it
    /// unchanged and returns false.
    pub fn set_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            self.clear();
            return true;
        }
        match Number::parse_literal(text) {
            Some(value) => {
                self.set_number(value);
                true
            }
            None => false,
        }
    }

    /// Re-seeds from a value.
    ///
    /// Whole-number floats are stored in integer form so later keystrokes do
    /// not extend a trailing `.0`.
    pub fn set_number(&mut self, value: Number) {
        match value.normalized() {
            Number::Int(v) => {
                self.digits = v.to_string();
                self.has_decimal = false;
            }
            Number::Float(v) => {
                // Whole floats beyond i64 print without a point
                self.digits = v.to_string();
                self.has_decimal = self.digits.contains('.');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &str) -> NumberBuilder {
        let mut builder = NumberBuilder::new();
        for c in keys.chars() {
            builder.append(DigitToken::from_char(c).unwrap());
        }
        builder
    }

    // ===== DigitToken tests =====

    #[test]
    fn test_digit_token_from_char() {
        for c in '0'..='9' {
            let token = DigitToken::from_char(c).unwrap();
            assert_eq!(token.as_char(), c);
        }
        assert_eq!(DigitToken::from_char('.'), Some(DigitToken::Point));
        assert_eq!(DigitToken::from_char('a'), None);
        assert_eq!(DigitToken::from_char('+'), None);
    }

    #[test]
    fn test_digit_token_digit_bounds() {
        assert_eq!(DigitToken::digit(9), Some(DigitToken::Digit(9)));
        assert_eq!(DigitToken::digit(10), None);
    }

    #[test]
    fn test_digit_token_parse() {
        assert_eq!(DigitToken::parse("7"), Some(DigitToken::Digit(7)));
        assert_eq!(DigitToken::parse("."), Some(DigitToken::Point));
        assert_eq!(DigitToken::parse("12"), None);
        assert_eq!(DigitToken::parse(""), None);
        assert_eq!(DigitToken::parse("x"), None);
    }

    // ===== Accumulation =====

    #[test]
    fn test_new_builder_is_zero() {
        let builder = NumberBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.value(), Number::ZERO);
        assert_eq!(builder.text(), "");
    }

    #[test]
    fn test_integer_entry() {
        let builder = build("123");
        assert_eq!(builder.value(), Number::Int(123));
        assert_eq!(builder.text(), "123");
        assert!(!builder.has_decimal());
    }

    #[test]
    fn test_decimal_entry() {
        let builder = build("12.5");
        assert_eq!(builder.value(), Number::Float(12.5));
        assert!(builder.has_decimal());
    }

    #[test]
    fn test_trailing_point_is_float() {
        assert_eq!(build("5.").value(), Number::Float(5.0));
    }

    #[test]
    fn test_leading_point() {
        assert_eq!(build(".25").value(), Number::Float(0.25));
    }

    #[test]
    fn test_lone_point_reads_zero() {
        assert_eq!(build(".").value(), Number::Float(0.0));
    }

    #[test]
    fn test_second_point_ignored() {
        let mut builder = build("1.");
        assert!(!builder.append(DigitToken::Point));
        builder.append(DigitToken::Digit(5));
        assert!(!builder.append(DigitToken::Point));
        assert_eq!(builder.text(), "1.5");
        assert_eq!(builder.text().matches('.').count(), 1);
    }

    #[test]
    fn test_clear() {
        let mut builder = build("3.14");
        builder.clear();
        assert!(builder.is_empty());
        assert!(!builder.has_decimal());
        assert_eq!(builder.value(), Number::ZERO);
        // A point is accepted again after clearing
        assert!(builder.append(DigitToken::Point));
    }

    // ===== Seeding =====

    #[test]
    fn test_set_number_whole_float_becomes_int() {
        let mut builder = NumberBuilder::new();
        builder.set_number(Number::Float(8.0));
        assert_eq!(builder.text(), "8");
        assert!(!builder.has_decimal());
        assert_eq!(builder.value(), Number::Int(8));
    }

    #[test]
    fn test_set_number_fractional_float() {
        let mut builder = NumberBuilder::new();
        builder.set_number(Number::Float(2.5));
        assert_eq!(builder.text(), "2.5");
        assert!(builder.has_decimal());
        // The existing point blocks another
        assert!(!builder.append(DigitToken::Point));
    }

    #[test]
    fn test_set_number_large_whole_float_accepts_point() {
        let mut builder = NumberBuilder::new();
        builder.set_number(Number::Float(1e20));
        assert_eq!(builder.text(), "100000000000000000000");
        assert!(!builder.has_decimal());
        assert!(builder.append(DigitToken::Point));
        assert_eq!(builder.text(), "100000000000000000000.");
        assert!(builder.has_decimal());
        assert!(!builder.append(DigitToken::Point));
    }

    #[test]
    fn test_set_number_negative() {
        let mut builder = NumberBuilder::new();
        builder.set_number(Number::Int(-3));
        assert_eq!(builder.value(), Number::Int(-3));
        builder.append(DigitToken::Digit(5));
        assert_eq!(builder.value(), Number::Int(-35));
    }

    #[test]
    fn test_set_text_literal() {
        let mut builder = NumberBuilder::new();
        assert!(builder.set_text("130.0"));
        assert_eq!(builder.text(), "130");
        assert_eq!(builder.value(), Number::Int(130));

        assert!(builder.set_text("123.45"));
        assert_eq!(builder.value(), Number::Float(123.45));
    }

    #[test]
    fn test_set_text_malformed_leaves_builder_unchanged() {
        let mut builder = build("42");
        assert!(!builder.set_text("4x2"));
        assert!(!builder.set_text("1.2.3"));
        assert_eq!(builder.text(), "42");
    }

    #[test]
    fn test_set_text_empty_clears() {
        let mut builder = build("9.9");
        assert!(builder.set_text(""));
        assert!(builder.is_empty());
        assert!(!builder.has_decimal());
    }
}
