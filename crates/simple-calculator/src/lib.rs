//! Simple Calculator - four-function running-total calculator
//!
//! Operands are typed digit by digit. Each operator folds the operand into a
//! running total right away and records a scrollback line; `=` resolves the
//! last operator against the operand typed after it.
//!
//! The [`core`] module is headless. The [`tui`] module (feature `tui`, on by
//! default) draws a keypad, a scrollback pane and a status line with ratatui.
//!
//! # Example
//!
//! ```rust
//! use simple_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for key in "5+3=".chars() {
//!     engine.press_key(key).unwrap();
//! }
//! assert_eq!(engine.display(), "8");
//! assert_eq!(engine.scrollback().last().unwrap().display(), "0 + 5 = 5");
//!
//! // Errors leave the state untouched
//! engine.reset();
//! assert_eq!(engine.press_key('0'), Ok(KeyOutcome::Digit));
//! assert_eq!(engine.press_key('/'), Err(CalcError::DivisionByZero));
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod output;

#[cfg(feature = "tui")]
pub mod tui;

pub use commands::{Cli, Commands, EvalArgs, OutputFormat, TuiArgs};
pub use config::{AppConfig, Verbosity};
pub use error::{CliError, CliResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        CalcError, CalcResult, CalculatorEngine, DigitToken, EquationLine, KeyOutcome, Number,
        NumberBuilder, Operation, Operator, OperatorOutcome, Phase, Scrollback,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
