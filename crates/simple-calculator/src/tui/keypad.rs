//! Clickable keypad for the TUI calculator
//!
//! Buttons light up when their key is pressed and mouse clicks are mapped
//! back to buttons with [`Keypad::hit_test`].

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Operation, Operator};

/// Keys in row-major order, four per row
const LAYOUT: &str = "789/456*123-0.=+";
const COLS: u16 = 4;
const ROWS: u16 = 4;

/// What a keypad button sends to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Apply an operation to the running total
    Operator(Operation),
    /// Show the running total
    Equals,
}

impl ButtonAction {
    /// Maps a key to its button action
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        if key == '.' {
            return Some(Self::Decimal);
        }
        if let Some(d) = key.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        Operator::from_char(key).map(|op| match op {
            Operator::Apply(op) => Self::Operator(op),
            Operator::Equals => Self::Equals,
        })
    }

    /// Returns the key this action sends
    #[must_use]
    pub fn key(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol().chars().next().unwrap_or('?'),
            Self::Equals => '=',
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Digit(_) | Self::Decimal => Style::default().fg(Color::White),
            Self::Operator(_) => Style::default().fg(Color::Yellow),
            Self::Equals => Style::default().fg(Color::Green),
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: ButtonAction,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl From<ButtonAction> for KeypadButton {
    fn from(action: ButtonAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }
}

impl KeypadButton {
    /// Returns the key this button sends to the engine
    #[must_use]
    pub fn to_char(&self) -> char {
        self.action.key()
    }
}

/// The keypad: a 4x4 grid
/// ```text
/// [7] [8] [9] [/]
/// [4] [5] [6] [*]
/// [1] [2] [3] [-]
/// [0] [.] [=] [+]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = LAYOUT
            .chars()
            .filter_map(ButtonAction::from_key)
            .map(KeypadButton::from)
            .collect();
        Self { buttons }
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if col >= COLS as usize {
            return None;
        }
        self.buttons.get(row * COLS as usize + col)
    }

    /// Finds a button by the key it sends
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.to_char() == ch)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        self.buttons.iter_mut().for_each(|b| b.pressed = false);
    }

    /// Highlights the button for a key, releasing the rest
    pub fn highlight_char(&mut self, ch: char) {
        for btn in &mut self.buttons {
            btn.pressed = btn.to_char() == ch;
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let (inner, cell_w, cell_h) = grid(area, 1)?;
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let col = (x - inner.x) / cell_w;
        let row = (y - inner.y) / cell_h;
        (col < COLS && row < ROWS).then(|| usize::from(row * COLS + col))
    }
}

/// Area inside the border plus the cell size, if cells are at least
/// `min_width` wide
fn grid(area: Rect, min_width: u16) -> Option<(Rect, u16, u16)> {
    let inner = area.inner(Margin::new(1, 1));
    let cell_w = inner.width / COLS;
    let cell_h = inner.height / ROWS;
    (cell_w >= min_width.max(1) && cell_h > 0).then_some((inner, cell_w, cell_h))
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        // "[x]" needs three cells
        let Some((inner, cell_w, cell_h)) = grid(area, 3) else {
            return;
        };

        for (i, btn) in (0u16..).zip(self.keypad.buttons()) {
            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                btn.action.style()
            };
            let label_row = Rect::new(
                inner.x + (i % COLS) * cell_w,
                inner.y + (i / COLS) * cell_h + cell_h / 2,
                cell_w,
                1,
            );
            Line::styled(format!("[{}]", btn.to_char()), style)
                .centered()
                .render(label_row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(keypad: &Keypad, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== ButtonAction tests =====

    #[test]
    fn test_from_key() {
        assert_eq!(ButtonAction::from_key('7'), Some(ButtonAction::Digit(7)));
        assert_eq!(ButtonAction::from_key('.'), Some(ButtonAction::Decimal));
        assert_eq!(
            ButtonAction::from_key('/'),
            Some(ButtonAction::Operator(Operation::Divide))
        );
        assert_eq!(ButtonAction::from_key('='), Some(ButtonAction::Equals));
        assert_eq!(ButtonAction::from_key('x'), None);
    }

    #[test]
    fn test_key_round_trip() {
        for key in LAYOUT.chars() {
            assert_eq!(ButtonAction::from_key(key).unwrap().key(), key);
        }
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.buttons().count(), 16);
        let rows: Vec<String> = (0..4)
            .map(|r| (0..4).map(|c| keypad.get_button_at(r, c).unwrap().to_char()).collect())
            .collect();
        assert_eq!(rows, vec!["789/", "456*", "123-", "0.=+"]);
        assert!(keypad.get_button_at(4, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_highlight_char() {
        let mut keypad = Keypad::new();
        keypad.highlight_char('5');
        let pressed: Vec<char> = keypad.buttons().filter(|b| b.pressed).map(KeypadButton::to_char).collect();
        assert_eq!(pressed, vec!['5']);

        keypad.highlight_char('x');
        assert!(!keypad.buttons().any(|b| b.pressed));
    }

    // ===== Hit testing =====

    #[test]
    fn test_hit_test_corners() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 10);
        assert_eq!(keypad.hit_test(area, 1, 1), Some(0));
        assert_eq!(keypad.hit_test(area, 20, 8), Some(15));
    }

    #[test]
    fn test_hit_test_misses() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Rect::new(5, 5, 22, 10), 5, 5), None);
        assert_eq!(keypad.hit_test(Rect::new(5, 5, 22, 10), 100, 100), None);
        assert_eq!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1), None);
    }

    // ===== Widget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let mut keypad = Keypad::new();
        keypad.highlight_char('=');
        let content = rendered(&keypad, Rect::new(0, 0, 22, 10));
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[/]"));
        assert!(content.contains("[=]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let content = rendered(&Keypad::new(), Rect::new(0, 0, 8, 4));
        assert!(!content.contains("[7]"));
    }
}
