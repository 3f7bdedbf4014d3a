//! Running-total calculator engine
//!
//! The engine has two observable phases. While **entering**, the display
//! shows the operand being typed. After an operator or `=`, it is
//! **showing the total** until the next digit arrives.
//!
//! Every operator other than `=` is applied immediately to the running total
//! with the current operand, logged to the scrollback and remembered as the
//! pending operator. `=` folds the operand typed since then into the total
//! with that pending operator and reloads the total as the next operand. With
//! nothing typed since the last operator, `=` just reloads the total.
//!
//! ```
//! use simple_calculator::core::{CalculatorEngine, Number, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.select_digit("5");
//! engine.select_operator(Operator::from_char('+').unwrap()).unwrap();
//! assert_eq!(engine.display(), "5");
//! assert_eq!(engine.scrollback().last().unwrap().display(), "0 + 5 = 5");
//!
//! engine.select_digit("3");
//! engine.select_operator(Operator::Equals).unwrap();
//! assert_eq!(engine.builder().value(), Number::Int(8));
//! ```

use tracing::{debug, trace, warn};

use crate::core::{
    CalcResult, DigitToken, EquationLine, Number, NumberBuilder, Operation, Operator, Scrollback,
};

/// What the display currently reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The operand being typed
    #[default]
    Entering,
    /// A just-computed total
    ShowingTotal,
}

/// Result of an operator press
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorOutcome {
    /// No state change: identity operand or unknown symbol
    Skipped,
    /// An operation was applied and logged
    Applied(EquationLine),
    /// `=` was pressed; carries the value reloaded into the builder
    Resolved(Number),
}

/// Result of a raw key press
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Not a calculator key, or a dropped decimal point
    Ignored,
    /// A digit or point was appended to the operand
    Digit,
    /// An operator key was handled
    Operator(OperatorOutcome),
}

/// Headless calculator state
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    builder: NumberBuilder,
    total: Number,
    previous_total: Number,
    history: Vec<String>,
    phase: Phase,
    shown: Number,
    pending: Option<Operation>,
    scrollback: Scrollback,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// History entries kept once the log is trimmed.
    ///
    /// The log is cut back to this many entries when it grows past twice
    /// the limit, so only the newest entries survive.
    pub const HISTORY_LIMIT: usize = 64;

    /// Creates an engine with a zero total
    #[must_use]
    pub fn new() -> Self {
        Self::with_scrollback(Scrollback::new())
    }

    /// Creates an engine whose scrollback keeps at most `capacity` lines
    #[must_use]
    pub fn with_scrollback_capacity(capacity: usize) -> Self {
        Self::with_scrollback(Scrollback::with_capacity(capacity))
    }

    fn with_scrollback(scrollback: Scrollback) -> Self {
        Self {
            builder: NumberBuilder::new(),
            total: Number::ZERO,
            previous_total: Number::ZERO,
            history: Vec::new(),
            phase: Phase::Entering,
            shown: Number::ZERO,
            pending: None,
            scrollback,
        }
    }

    /// Returns the operand builder
    #[must_use]
    pub fn builder(&self) -> &NumberBuilder {
        &self.builder
    }

    /// Returns the running total
    #[must_use]
    pub fn total(&self) -> Number {
        self.total
    }

    /// Returns the running total before the last operator
    #[must_use]
    pub fn previous_total(&self) -> Number {
        self.previous_total
    }

    /// Returns the operand texts and operator symbols recorded so far
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while the display reflects a computed total
    #[must_use]
    pub fn is_showing_total(&self) -> bool {
        self.phase == Phase::ShowingTotal
    }

    /// Returns the operation `=` would resolve, if any
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns the scrollback log
    #[must_use]
    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    /// Routes a digit or point token to the operand.
    ///
    /// Anything that is not a single digit or `.` is ignored. Returns true if
    /// the token was appended.
    pub fn select_digit(&mut self, token: &str) -> bool {
        match DigitToken::parse(token) {
            Some(token) => self.select_token(token),
            None => {
                trace!(token, "ignoring invalid digit token");
                false
            }
        }
    }

    /// Appends a typed token to the operand and switches to entering.
    pub fn select_token(&mut self, token: DigitToken) -> bool {
        self.phase = Phase::Entering;
        let appended = self.builder.append(token);
        if !appended {
            trace!("ignoring second decimal point");
        }
        appended
    }

    /// Parses and applies an operator symbol; unknown symbols are skipped.
    pub fn select_operator_symbol(&mut self, symbol: &str) -> CalcResult<OperatorOutcome> {
        match Operator::from_symbol(symbol) {
            Some(op) => self.select_operator(op),
            None => {
                trace!(symbol, "ignoring unknown operator");
                Ok(OperatorOutcome::Skipped)
            }
        }
    }

    /// Applies an operator key.
    ///
    /// `+`/`-` with a zero operand and `*`/`/` with an operand of one are
    /// skipped. On an arithmetic error nothing is changed.
    pub fn select_operator(&mut self, op: Operator) -> CalcResult<OperatorOutcome> {
        let operand = self.builder.value();
        if op.is_guarded_by(operand) {
            trace!(op = op.symbol(), %operand, "skipping identity operand");
            return Ok(OperatorOutcome::Skipped);
        }

        match op {
            Operator::Apply(operation) => self.apply(operation, operand),
            Operator::Equals => self.resolve(operand),
        }
    }

    fn apply(&mut self, operation: Operation, operand: Number) -> CalcResult<OperatorOutcome> {
        let old_total = self.total;
        let new_total = operation.apply(old_total, operand).inspect_err(|err| {
            warn!(%old_total, op = operation.symbol(), %operand, %err, "operator rejected");
        })?;

        let operand_text = self.builder.text().to_owned();
        self.history.push(operand_text.clone());
        self.history.push(operation.symbol().to_owned());
        self.trim_history();

        let line = EquationLine::new(old_total, operation, operand_text, new_total);
        self.scrollback.push(line.clone());

        self.previous_total = old_total;
        self.total = new_total;
        self.shown = new_total;
        self.pending = Some(operation);
        self.builder.clear();
        self.phase = Phase::ShowingTotal;

        debug!(%line, "operator applied");
        Ok(OperatorOutcome::Applied(line))
    }

    fn resolve(&mut self, operand: Number) -> CalcResult<OperatorOutcome> {
        let old_total = self.total;
        let pending = self.pending.filter(|_| !self.builder.is_empty());
        let resolved = match pending {
            Some(operation) => operation.apply(old_total, operand).inspect_err(|err| {
                warn!(%old_total, op = operation.symbol(), %operand, %err, "equals rejected");
            })?,
            None => old_total,
        };

        self.history.push(self.builder.text().to_owned());
        self.trim_history();
        self.previous_total = old_total;
        self.total = resolved;
        self.pending = None;
        self.builder.set_number(resolved);
        self.shown = self.builder.value();
        self.phase = Phase::ShowingTotal;

        debug!(total = %resolved, "equals resolved");
        Ok(OperatorOutcome::Resolved(self.shown))
    }

    fn trim_history(&mut self) {
        if self.history.len() > 2 * Self::HISTORY_LIMIT {
            let excess = self.history.len() - Self::HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    /// Handles a raw keyboard character.
    ///
    /// Digits and `.` go to the operand, `+ - * / =` to the operator handler,
    /// everything else is ignored.
    pub fn press_key(&mut self, key: char) -> CalcResult<KeyOutcome> {
        if let Some(token) = DigitToken::from_char(key) {
            return Ok(if self.select_token(token) {
                KeyOutcome::Digit
            } else {
                KeyOutcome::Ignored
            });
        }
        match Operator::from_char(key) {
            Some(op) => self.select_operator(op).map(KeyOutcome::Operator),
            None => {
                trace!(?key, "ignoring key");
                Ok(KeyOutcome::Ignored)
            }
        }
    }

    /// Returns the current display string
    #[must_use]
    pub fn display(&self) -> String {
        match self.phase {
            Phase::ShowingTotal => self.shown.to_string(),
            Phase::Entering => self.builder.text().to_owned(),
        }
    }

    /// Returns the one-line history summary.
    ///
    /// With two or more history entries this is the previous total followed by
    /// the last entry and the one before it; otherwise just the previous total.
    #[must_use]
    pub fn history_summary(&self) -> String {
        match self.history.as_slice() {
            [.., before_last, last] => format!("{} {} {}", self.previous_total, last, before_last),
            _ => self.previous_total.to_string(),
        }
    }

    /// Returns to the initial state, keeping the scrollback capacity
    pub fn reset(&mut self) {
        debug!("engine reset");
        *self = Self::with_scrollback_capacity(self.scrollback.capacity());
    }
}
