//! Frontend drivers
//!
//! A frontend only needs to deliver discrete digit and operator events and to
//! read back the display, the summary line and the scrollback. This trait is
//! that capability set, so the same scenario runs against the bare engine and
//! the terminal app.

use crate::core::{CalcError, CalcResult, CalculatorEngine, KeyOutcome, OperatorOutcome};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Delivers a digit or decimal point token
    fn press_digit(&mut self, token: &str) -> bool;

    /// Delivers an operator symbol (`+ - * / =`)
    fn press_operator(&mut self, symbol: &str) -> CalcResult<OperatorOutcome>;

    /// Delivers a raw keyboard character
    fn press_key(&mut self, key: char) -> CalcResult<KeyOutcome>;

    /// Gets the current display string
    fn display(&self) -> String;

    /// Gets the one-line history summary
    fn summary(&self) -> String;

    /// Gets the scrollback lines, oldest first
    fn scrollback(&self) -> Vec<String>;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Feeds every character of `keys` through [`press_key`](Self::press_key).
    ///
    /// Arithmetic errors do not stop the sequence; the engine state is intact
    /// after each one. The errors are returned in order.
    fn press_keys(&mut self, keys: &str) -> Vec<CalcError> {
        keys.chars()
            .filter_map(|key| self.press_key(key).err())
            .collect()
    }
}

/// Driver over a bare engine, with no terminal attached
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    engine: CalculatorEngine,
}

impl HeadlessDriver {
    /// Creates a headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a headless driver around an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self { engine }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press_digit(&mut self, token: &str) -> bool {
        self.engine.select_digit(token)
    }

    fn press_operator(&mut self, symbol: &str) -> CalcResult<OperatorOutcome> {
        self.engine.select_operator_symbol(symbol)
    }

    fn press_key(&mut self, key: char) -> CalcResult<KeyOutcome> {
        self.engine.press_key(key)
    }

    fn display(&self) -> String {
        self.engine.display()
    }

    fn summary(&self) -> String {
        self.engine.history_summary()
    }

    fn scrollback(&self) -> Vec<String> {
        self.engine.scrollback().iter().map(|line| line.display()).collect()
    }

    fn reset(&mut self) {
        self.engine.reset();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver, KeyOutcome, OperatorOutcome};
    use crate::tui::CalculatorApp;

    /// Driver wrapping the terminal app state
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press_digit(&mut self, token: &str) -> bool {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => matches!(self.app.press_key(c), Ok(KeyOutcome::Digit)),
                _ => false,
            }
        }

        fn press_operator(&mut self, symbol: &str) -> CalcResult<OperatorOutcome> {
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match self.app.press_key(c)? {
                    KeyOutcome::Operator(outcome) => Ok(outcome),
                    KeyOutcome::Digit | KeyOutcome::Ignored => Ok(OperatorOutcome::Skipped),
                },
                _ => Ok(OperatorOutcome::Skipped),
            }
        }

        fn press_key(&mut self, key: char) -> CalcResult<KeyOutcome> {
            self.app.press_key(key)
        }

        fn display(&self) -> String {
            self.app.engine().display()
        }

        fn summary(&self) -> String {
            self.app.engine().history_summary()
        }

        fn scrollback(&self) -> Vec<String> {
            self.app
                .engine()
                .scrollback()
                .iter()
                .map(|line| line.display())
                .collect()
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
