//! Operators and checked four-function arithmetic

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Number};

/// Arithmetic applied to the running total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the operand that makes this operation a no-op.
    ///
    /// Adding or subtracting zero and multiplying or dividing by one leave the
    /// total untouched, so the engine refuses to record them.
    #[must_use]
    pub const fn identity(&self) -> Number {
        match self {
            Self::Add | Self::Subtract => Number::ZERO,
            Self::Multiply | Self::Divide => Number::ONE,
        }
    }

    /// Returns true if `operand` is this operation's identity
    #[must_use]
    pub fn is_identity(&self, operand: Number) -> bool {
        operand.as_f64() == self.identity().as_f64()
    }

    /// Applies the operation: `lhs <op> rhs`
    pub fn apply(&self, lhs: Number, rhs: Number) -> CalcResult<Number> {
        match self {
            Self::Add => add(lhs, rhs),
            Self::Subtract => subtract(lhs, rhs),
            Self::Multiply => multiply(lhs, rhs),
            Self::Divide => divide(lhs, rhs),
        }
    }
}

/// An operator key: one of the four operations, or equals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Apply an operation to the running total
    Apply(Operation),
    /// Resolve and show the running total
    Equals,
}

impl Operator {
    /// Parses an operator symbol (`+ - * / =`)
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Parses an operator key character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Apply(Operation::Add)),
            '-' => Some(Self::Apply(Operation::Subtract)),
            '*' => Some(Self::Apply(Operation::Multiply)),
            '/' => Some(Self::Apply(Operation::Divide)),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Returns the operator symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Apply(op) => op.symbol(),
            Self::Equals => "=",
        }
    }

    /// Returns true if pressing this operator with `operand` should be ignored
    #[must_use]
    pub fn is_guarded_by(&self, operand: Number) -> bool {
        match self {
            Self::Apply(op) => op.is_identity(operand),
            Self::Equals => false,
        }
    }
}

impl From<Operation> for Operator {
    fn from(op: Operation) -> Self {
        Self::Apply(op)
    }
}

/// Addition: a + b
pub fn add(a: Number, b: Number) -> CalcResult<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.checked_add(y).map(Number::Int).ok_or(CalcError::Overflow),
        _ => check_float(a.as_f64() + b.as_f64()),
    }
}

/// Subtraction: a - b
pub fn subtract(a: Number, b: Number) -> CalcResult<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.checked_sub(y).map(Number::Int).ok_or(CalcError::Overflow),
        _ => check_float(a.as_f64() - b.as_f64()),
    }
}

/// Multiplication: a * b
pub fn multiply(a: Number, b: Number) -> CalcResult<Number> {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => x.checked_mul(y).map(Number::Int).ok_or(CalcError::Overflow),
        _ => check_float(a.as_f64() * b.as_f64()),
    }
}

/// Real division: a / b, always a float
pub fn divide(a: Number, b: Number) -> CalcResult<Number> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    check_float(a.as_f64() / b.as_f64())
}

/// Rejects NaN and infinite float results
fn check_float(result: f64) -> CalcResult<Number> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(Number::Float(result))
    }
}
