//! Home screen
//!
//! Greeting, shortcuts to the three games, tips and the credit line.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::Action;
use crate::models::AppSettings;
use crate::nav::Screen;
use crate::ui::Theme;

/// Game buttons: target, label, shortcut
pub const HOME_BUTTONS: [(Screen, &str, char); 3] = [
    (Screen::Wheel, "Spin Wheel", 'w'),
    (Screen::Truth, "Truth or Dare", 't'),
    (Screen::Counter, "Love Counter", 'c'),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeView {
    /// Focused button index
    pub focus: usize,
}

impl HomeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_target(&self) -> Screen {
        HOME_BUTTONS[self.focus.min(HOME_BUTTONS.len() - 1)].0
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                self.focus = self.focus.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                self.focus = (self.focus + 1).min(HOME_BUTTONS.len() - 1);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::Open(self.focused_target()),
            KeyCode::Char(c) => HOME_BUTTONS
                .iter()
                .find(|(_, _, shortcut)| *shortcut == c)
                .map(|(screen, _, _)| Action::Open(*screen))
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, settings: &AppSettings) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting
                Constraint::Length(3), // Wheel + Truth/Dare
                Constraint::Length(3), // Counter
                Constraint::Min(6),    // Tips
                Constraint::Length(3), // Credit
            ])
            .split(area);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(settings.greeting(), theme.title())),
            Line::from(Span::styled("Pilih permainan untuk memulai", theme.dimmed())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(greeting, chunks[0]);

        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        self.render_button(frame, row[0], theme, 0);
        self.render_button(frame, row[1], theme, 1);
        self.render_button(frame, chunks[2], theme, 2);

        let tips = Paragraph::new(vec![
            Line::from(Span::styled("Tips Seru:", theme.bold())),
            Line::from(Span::styled(
                "- Gunakan Settings untuk ubah nama dan warna tema.",
                theme.text(),
            )),
            Line::from(Span::styled(
                "- Coba Spin Wheel untuk ide kencan spontan.",
                theme.text(),
            )),
            Line::from(Span::styled(
                "- Truth or Dare untuk tantangan santai.",
                theme.text(),
            )),
        ])
        .wrap(Wrap { trim: true })
        .style(theme.card())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border()),
        );
        frame.render_widget(tips, chunks[3]);

        let credit = Paragraph::new(Line::from(vec![
            Span::raw("♥ "),
            Span::raw("Dibuat oleh M. Samjaya"),
            Span::raw(" ♥"),
        ]))
        .alignment(Alignment::Center)
        .style(theme.credit())
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(theme.credit()));
        frame.render_widget(credit, chunks[4]);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, theme: &Theme, idx: usize) {
        let (_, label, shortcut) = HOME_BUTTONS[idx];
        let focused = self.focus == idx;

        let button = Paragraph::new(Line::from(vec![
            Span::styled(label, if focused { theme.highlighted() } else { theme.bold() }),
            Span::styled(format!("  [{}]", shortcut), theme.dimmed()),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused { theme.border_focused() } else { theme.border() }),
        );
        frame.render_widget(button, area);
    }
}
