//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns where the keypad is drawn for a full-screen `area`.
///
/// Mouse clicks are hit-tested against this rectangle.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    let columns = horizontal_layout(area);
    side_layout(columns[1])[0]
}

/// Main area on the left, keypad and help on the right
fn horizontal_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(30), Constraint::Length(KEYPAD_WIDTH)])
        .split(area)
        .to_vec()
}

fn side_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(KEYPAD_HEIGHT), Constraint::Min(0)])
        .split(area)
        .to_vec()
}

const KEYPAD_WIDTH: u16 = 22;
const KEYPAD_HEIGHT: u16 = 10;

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Summary, display, scrollback and status, top to bottom
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Summary
                Constraint::Length(3), // Display
                Constraint::Min(4),    // Scrollback
                Constraint::Length(3), // Status
            ])
            .split(area)
            .to_vec()
    }

    fn render_summary(&self, area: Rect, buf: &mut Buffer) {
        let summary = self.app.engine().history_summary();
        Paragraph::new(Span::styled(summary, Style::default().fg(Color::Gray)))
            .alignment(ratatui::layout::Alignment::Right)
            .block(
                Block::default()
                    .title(" History ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let style = if engine.is_showing_total() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Paragraph::new(Span::styled(engine.display(), style))
            .alignment(ratatui::layout::Alignment::Right)
            .block(
                Block::default()
                    .title(" Current ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    /// Scrollback pane, newest line at the bottom
    fn render_scrollback(&self, area: Rect, buf: &mut Buffer) {
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .app
            .engine()
            .scrollback()
            .tail(visible)
            .into_iter()
            .map(|line| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} {} {}", line.lhs, line.operation.symbol(), line.operand),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw(" = "),
                    Span::styled(line.result.to_string(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Scrollback ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status();
        let style = if self.app.last_error().is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };

        Paragraph::new(Span::styled(status, style))
            .block(
                Block::default()
                    .title(" Status ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>6}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let columns = horizontal_layout(area);
        let chunks = self.create_layout(columns[0]);
        self.render_summary(chunks[0], buf);
        self.render_display(chunks[1], buf);
        self.render_scrollback(chunks[2], buf);
        self.render_status(chunks[3], buf);

        let side = side_layout(columns[1]);
        KeypadWidget::new(self.app.keypad()).render(side[0], buf);
        self.render_help(side[1], buf);
    }
}

/// Window title
pub const TITLE: &str = " Simple Calculator ";

/// Key bindings shown in the help panel
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Operand"),
    ("+-*/", "Operator"),
    ("= ⏎", "Total"),
    ("Ctrl+L", "Reset"),
    ("Esc", "Quit"),
];
