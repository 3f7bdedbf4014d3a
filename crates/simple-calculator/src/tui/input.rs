//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a character to the engine (digits, point, operators)
    Key(char),
    /// Press equals
    Evaluate,
    /// Reset the calculator, scrollback included
    Reset,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// Only presses count; release and repeat events are ignored so a held
    /// Enter cannot fire equals twice.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Reset,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if Self::is_calculator_char(c) => KeyAction::Key(c),
            KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Returns true if the character is a calculator key
    #[must_use]
    pub fn is_calculator_char(c: char) -> bool {
        c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '=')
    }
}
