//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::{ButtonAction, Keypad};
use crate::core::{CalcError, CalcResult, CalculatorEngine, KeyOutcome};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The headless engine doing all the arithmetic
    engine: CalculatorEngine,
    /// Keypad model, used for highlighting and click hit-testing
    keypad: Keypad,
    /// Error from the most recent operator, cleared by the next handled key
    last_error: Option<CalcError>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_engine(CalculatorEngine::new())
    }

    /// Creates a calculator app around an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            engine,
            keypad: Keypad::new(),
            last_error: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the error raised by the last operator, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a keyboard character, highlighting the matching button
    pub fn press_key(&mut self, key: char) -> CalcResult<KeyOutcome> {
        self.keypad.highlight_char(key);
        let result = self.engine.press_key(key);
        match &result {
            Ok(KeyOutcome::Ignored) => {}
            Ok(_) => self.last_error = None,
            Err(err) => self.last_error = Some(err.clone()),
        }
        result
    }

    /// Presses the keypad button at `index`
    pub fn press_button(&mut self, index: usize) -> Option<CalcResult<KeyOutcome>> {
        let key = self.keypad.get_button(index)?.to_char();
        Some(self.press_key(key))
    }

    /// Handles a mouse click at terminal coordinates.
    ///
    /// `keypad_area` is where the keypad was rendered. Clicks outside any
    /// button are ignored.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<CalcResult<KeyOutcome>> {
        let index = self.keypad.hit_test(keypad_area, x, y)?;
        debug!(index, "keypad click");
        self.press_button(index)
    }

    /// Applies a mapped key action.
    ///
    /// Arithmetic errors are kept in [`last_error`](Self::last_error) for the
    /// status line.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Key(c) => {
                let _ = self.press_key(c);
            }
            KeyAction::Evaluate => {
                let _ = self.press_key('=');
            }
            KeyAction::Reset => self.reset(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Resets the engine and clears the status
    pub fn reset(&mut self) {
        self.engine.reset();
        self.keypad.release_all();
        self.last_error = None;
    }

    /// Gets the status line text
    #[must_use]
    pub fn status(&self) -> String {
        match &self.last_error {
            Some(err) => format!("✗ Error: {err}"),
            None => match self.engine.pending() {
                Some(op) if self.engine.is_showing_total() => {
                    format!("Total shown, pending {}", op.symbol())
                }
                _ if self.engine.is_showing_total() => "Total shown".to_string(),
                _ => "Ready".to_string(),
            },
        }
    }

    /// Returns true if the last key was the given button action
    #[must_use]
    pub fn is_highlighted(&self, action: ButtonAction) -> bool {
        self.keypad
            .buttons()
            .any(|btn| btn.pressed && btn.action == action)
    }
}
