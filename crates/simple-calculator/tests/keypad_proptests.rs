//! Property-based tests for the terminal keypad

#![cfg(feature = "tui")]

use proptest::prelude::*;
use ratatui::layout::Rect;
use simple_calculator::tui::{ButtonAction, CalculatorApp, InputHandler, Keypad};

// ===== Strategy definitions =====

/// Generate valid grid positions
fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..4usize, 0usize..4usize)
}

/// Keypad origins that keep a 22x10 keypad on a u16 screen
fn origin_strategy() -> impl Strategy<Value = (u16, u16)> {
    (0u16..200, 0u16..100)
}

// ===== Layout properties =====

proptest! {
    /// Every grid cell holds a button
    #[test]
    fn prop_every_position_has_button((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_some());
    }

    /// Positions outside the grid are empty
    #[test]
    fn prop_outside_grid_is_empty(row in 4usize..50, col in 0usize..50) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
        prop_assert!(keypad.get_button_at(col, row).is_none());
    }

    /// Each button's key maps back to that button and is a calculator key
    #[test]
    fn prop_button_char_round_trip((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let index = row * 4 + col;
        let key = keypad.get_button(index).unwrap().to_char();
        prop_assert_eq!(keypad.find_button_by_char(key), Some(index));
        prop_assert!(InputHandler::is_calculator_char(key));
    }
}

// ===== Hit testing =====

proptest! {
    /// Clicking inside a button cell hits that button wherever the keypad sits
    #[test]
    fn prop_hit_test_inside_cell(
        (row, col) in grid_position_strategy(),
        (x0, y0) in origin_strategy(),
        dx in 0u16..5,
        dy in 0u16..2,
    ) {
        let keypad = Keypad::new();
        let area = Rect::new(x0, y0, 22, 10);
        let x = x0 + 1 + col as u16 * 5 + dx;
        let y = y0 + 1 + row as u16 * 2 + dy;
        prop_assert_eq!(keypad.hit_test(area, x, y), Some(row * 4 + col));
    }

    /// The border never hits a button
    #[test]
    fn prop_hit_test_border_misses((x0, y0) in origin_strategy(), offset in 0u16..22) {
        let keypad = Keypad::new();
        let area = Rect::new(x0, y0, 22, 10);
        prop_assert!(keypad.hit_test(area, x0 + offset, y0).is_none());
        prop_assert!(keypad.hit_test(area, x0 + offset, y0 + 9).is_none());
        prop_assert!(keypad.hit_test(area, x0, y0 + offset % 10).is_none());
    }
}

// ===== App properties =====

proptest! {
    /// Pressing a button highlights exactly that button
    #[test]
    fn prop_press_button_highlights_one(index in 0usize..16) {
        let mut app = CalculatorApp::new();
        let action = app.keypad().get_button(index).unwrap().action;
        let _ = app.press_button(index);
        prop_assert!(app.is_highlighted(action));
        prop_assert_eq!(app.keypad().buttons().filter(|b| b.pressed).count(), 1);
    }

    /// Digit buttons always land in the operand
    #[test]
    fn prop_digit_buttons_enter_digits(digits in proptest::collection::vec(0u8..=9, 1..8)) {
        let mut app = CalculatorApp::new();
        for d in &digits {
            let index = app
                .keypad()
                .buttons()
                .position(|b| b.action == ButtonAction::Digit(*d))
                .unwrap();
            let _ = app.press_button(index);
        }
        let expected: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        prop_assert_eq!(app.engine().builder().text(), expected.as_str());
    }
}
