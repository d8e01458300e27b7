//! Love counter: one tap card per partner

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::models::AppSettings;
use crate::ui::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterView {
    pub left: u64,
    pub right: u64,
}

impl CounterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap_left(&mut self) {
        self.left = self.left.saturating_add(1);
    }

    pub fn tap_right(&mut self) {
        self.right = self.right.saturating_add(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn counts(&self) -> (u64, u64) {
        (self.left, self.right)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => self.tap_left(),
            KeyCode::Right | KeyCode::Char('l') => self.tap_right(),
            KeyCode::Char('r') => self.reset(),
            _ => return false,
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, settings: &AppSettings) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(7), // Cards
                Constraint::Length(1), // Reset hint
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Span::styled("Love Counter", theme.title())).alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        render_card(frame, cards[0], theme, &settings.left_name, self.left, "←");
        render_card(frame, cards[1], theme, &settings.right_name, self.right, "→");

        let hint = Paragraph::new(Line::from(vec![
            Span::styled(" r ", theme.keybind()),
            Span::styled("Reset", theme.dimmed()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }
}

fn render_card(frame: &mut Frame, area: Rect, theme: &Theme, name: &str, count: u64, key: &str) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled("♥", theme.title())),
        Line::from(Span::styled(name.to_string(), theme.bold())),
        Line::from(""),
        Line::from(Span::styled(count.to_string(), theme.title())),
        Line::from(Span::styled(format!("tekan {}", key), theme.dimmed())),
    ])
    .alignment(Alignment::Center)
    .style(theme.card())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border()),
    );
    frame.render_widget(card, area);
}
