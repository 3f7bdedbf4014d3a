//! Headless calculator core: number entry, arithmetic, and the running-total engine.
//!
//! Nothing in here knows about terminals or widgets. Frontends feed discrete
//! digit and operator events into [`CalculatorEngine`] and read back the
//! display string, the history summary and the scrollback.

pub mod builder;
pub mod engine;
pub mod number;
mod operations;
pub mod scrollback;

pub use builder::{DigitToken, NumberBuilder};
pub use engine::{CalculatorEngine, KeyOutcome, OperatorOutcome, Phase};
pub use number::Number;
pub use operations::{Operation, Operator};
pub use scrollback::{EquationLine, Scrollback};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic errors surfaced to the caller.
///
/// Malformed input never produces one of these; it is absorbed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result does not fit the numeric model (integer overflow or infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}
