//! Settings screen
//!
//! Edits a draft of the names and accent colour. Nothing leaves this view
//! until Save, which hands the draft to the app root.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::Action;
use crate::models::AppSettings;
use crate::ui::input::TextInput;
use crate::ui::theme::ACCENT_PALETTE;
use crate::ui::Theme;

/// Focusable rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsField {
    #[default]
    LeftName,
    RightName,
    Accent,
    Save,
}

impl SettingsField {
    const ORDER: [SettingsField; 4] = [
        SettingsField::LeftName,
        SettingsField::RightName,
        SettingsField::Accent,
        SettingsField::Save,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsView {
    pub left: TextInput,
    pub right: TextInput,
    pub accent: i32,
    pub focus: SettingsField,
    pub editing: bool,
}

impl SettingsView {
    /// Draft seeded from the committed settings
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            left: TextInput::with_value(settings.left_name.clone()),
            right: TextInput::with_value(settings.right_name.clone()),
            accent: settings.accent_index,
            focus: SettingsField::LeftName,
            editing: false,
        }
    }

    pub fn draft(&self) -> AppSettings {
        AppSettings::new(self.left.value(), self.right.value(), self.accent)
    }

    /// Step through the palette, wrapping at both ends
    pub fn cycle_accent(&mut self, delta: i32) {
        let len = ACCENT_PALETTE.len() as i32;
        let current = if (0..len).contains(&self.accent) { self.accent } else { 0 };
        self.accent = (current + delta).rem_euclid(len);
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            SettingsField::LeftName => Some(&mut self.left),
            SettingsField::RightName => Some(&mut self.right),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.editing = false,
                _ => {
                    if let Some(input) = self.focused_input() {
                        input.handle_key(key);
                    }
                }
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => self.focus = self.focus.next(),
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus == SettingsField::Accent => self.cycle_accent(-1),
            KeyCode::Right if self.focus == SettingsField::Accent => self.cycle_accent(1),
            KeyCode::Char('s') => return Action::SaveSettings(self.draft()),
            KeyCode::Enter => match self.focus {
                SettingsField::LeftName | SettingsField::RightName => self.editing = true,
                SettingsField::Accent => self.cycle_accent(1),
                SettingsField::Save => return Action::SaveSettings(self.draft()),
            },
            _ => {}
        }
        Action::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Left name
                Constraint::Length(3), // Right name
                Constraint::Length(3), // Accent
                Constraint::Length(3), // Save
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Span::styled("Pengaturan", theme.title()));
        frame.render_widget(title, chunks[0]);

        self.render_input(frame, chunks[1], theme, " Nama Kiri ", &self.left, SettingsField::LeftName);
        self.render_input(frame, chunks[2], theme, " Nama Kanan ", &self.right, SettingsField::RightName);

        let mut swatches = Vec::with_capacity(ACCENT_PALETTE.len() * 2);
        for (i, color) in ACCENT_PALETTE.iter().enumerate() {
            let selected = self.accent == i as i32;
            let (open, close) = if selected { ("[", "]") } else { (" ", " ") };
            swatches.push(Span::styled(open, theme.bold()));
            swatches.push(Span::styled("██", Style::default().fg(*color)));
            swatches.push(Span::styled(close, theme.bold()));
            swatches.push(Span::raw(" "));
        }
        let accent = Paragraph::new(Line::from(swatches)).block(self.field_block(
            theme,
            " Warna Aksen ",
            SettingsField::Accent,
        ));
        frame.render_widget(accent, chunks[3]);

        let save_focused = self.focus == SettingsField::Save;
        let save = Paragraph::new(Span::styled(
            " Simpan ",
            if save_focused { theme.highlighted() } else { theme.bold() },
        ))
        .alignment(Alignment::Center)
        .block(self.field_block(theme, "", SettingsField::Save));
        frame.render_widget(save, chunks[4]);
    }

    fn field_block<'a>(&self, theme: &Theme, title: &'a str, field: SettingsField) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focus == field { theme.border_focused() } else { theme.border() })
            .title(Span::styled(title, theme.title()))
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        title: &str,
        input: &TextInput,
        field: SettingsField,
    ) {
        let line = if self.editing && self.focus == field {
            let (before, after) = input.split_at_cursor();
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled("│", theme.keybind()),
                Span::raw(after.to_string()),
            ])
        } else {
            Line::from(input.value().to_string())
        };

        let paragraph = Paragraph::new(line)
            .style(theme.input())
            .block(self.field_block(theme, title, field));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn retype(view: &mut SettingsView, text: &str) {
        view.handle_key(key(KeyCode::Enter));
        for _ in 0..32 {
            view.handle_key(key(KeyCode::Backspace));
        }
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)));
        }
        view.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_seeded_from_settings() {
        let view = SettingsView::new(&AppSettings::new("Budi", "Sari", 4));
        assert_eq!(view.draft(), AppSettings::new("Budi", "Sari", 4));
        assert_eq!(view.focus, SettingsField::LeftName);
    }

    #[test]
    fn test_edit_and_save() {
        let mut view = SettingsView::new(&AppSettings::default());
        retype(&mut view, "Budi");
        view.handle_key(key(KeyCode::Down));
        retype(&mut view, "Sari");
        view.handle_key(key(KeyCode::Down));
        for _ in 0..3 {
            view.handle_key(key(KeyCode::Right));
        }
        view.handle_key(key(KeyCode::Down));

        assert_eq!(view.focus, SettingsField::Save);
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            Action::SaveSettings(AppSettings::new("Budi", "Sari", 3))
        );
    }

    #[test]
    fn test_s_key_types_while_editing() {
        let mut view = SettingsView::new(&AppSettings::new("", "B", 0));
        view.handle_key(key(KeyCode::Enter));
        assert_eq!(view.handle_key(key(KeyCode::Char('s'))), Action::None);
        assert_eq!(view.left.value(), "s");

        view.handle_key(key(KeyCode::Esc));
        assert_eq!(
            view.handle_key(key(KeyCode::Char('s'))),
            Action::SaveSettings(AppSettings::new("s", "B", 0))
        );
    }

    #[test]
    fn test_accent_cycle_wraps() {
        let mut view = SettingsView::new(&AppSettings::default());
        view.cycle_accent(-1);
        assert_eq!(view.accent, 5);
        view.cycle_accent(1);
        assert_eq!(view.accent, 0);
    }

    #[test]
    fn test_accent_cycle_from_invalid() {
        let mut view = SettingsView::new(&AppSettings::new("A", "B", 42));
        view.cycle_accent(1);
        assert_eq!(view.accent, 1);
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(SettingsField::Save.next(), SettingsField::LeftName);
        assert_eq!(SettingsField::LeftName.prev(), SettingsField::Save);
    }
}
