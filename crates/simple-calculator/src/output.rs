//! Batch evaluation and report formatting for `eval`

use serde::Serialize;
use tracing::info;

use crate::commands::OutputFormat;
use crate::core::{CalculatorEngine, Scrollback};
use crate::driver::{CalculatorDriver, HeadlessDriver};
use crate::error::CliResult;

/// Final calculator state after a key sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Keys that were pressed
    pub keys: String,
    /// Display after the last key
    pub display: String,
    /// One-line history summary
    pub summary: String,
    /// Scrollback lines, oldest first
    pub scrollback: Scrollback,
    /// Arithmetic errors, in the order they occurred
    pub errors: Vec<String>,
}

impl EvalReport {
    /// Runs `keys` through a fresh headless engine.
    ///
    /// Errors do not stop the run; every key is applied.
    #[must_use]
    pub fn run(keys: &str, scrollback_capacity: usize) -> Self {
        let mut driver =
            HeadlessDriver::with_engine(CalculatorEngine::with_scrollback_capacity(scrollback_capacity));
        let errors = driver.press_keys(keys);
        info!(keys, errors = errors.len(), "evaluated key sequence");

        Self {
            keys: keys.to_string(),
            display: driver.display(),
            summary: driver.summary(),
            scrollback: driver.engine().scrollback().clone(),
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }

    /// Returns true if no arithmetic error occurred
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Formats the report for printing
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> CliResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> String {
        let mut out = self.scrollback.export_formatted();
        if !self.scrollback.is_empty() {
            out.push_str("\n--\n");
        }
        out.push_str(&format!("summary: {}\n", self.summary));
        out.push_str(&format!("display: {}", self.display));
        for error in &self.errors {
            out.push_str(&format!("\nerror: {error}"));
        }
        out
    }
}
