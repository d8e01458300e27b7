//! Truth or Dare picker
//!
//! Picks from builtin prompts plus the couple's own. New prompts are typed
//! into an input line and persisted by the app root.

use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::Action;
use crate::models::{AddOutcome, CustomPromptSet, Mode};
use crate::ui::input::TextInput;
use crate::ui::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthDareView {
    pub mode: Mode,
    /// Last picked prompt
    pub current: Option<String>,
    pub input: TextInput,
    pub editing: bool,
    pub customs: CustomPromptSet,
}

impl TruthDareView {
    pub fn new(customs: CustomPromptSet) -> Self {
        Self {
            customs,
            ..Self::default()
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Pick from builtin + custom for the active mode
    pub fn pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        let picked = self.customs.pick(self.mode, rng);
        self.current.insert(picked).as_str()
    }

    /// Add the input text as a custom prompt for the active mode.
    ///
    /// Blank input is left in place; anything else clears the input.
    pub fn submit(&mut self) -> AddOutcome {
        let outcome = self.customs.add(self.mode, self.input.value());
        match &outcome {
            AddOutcome::Added(text) => {
                log::info!("Added custom {}: {}", self.mode, text);
                self.input.clear();
            }
            AddOutcome::Duplicate => self.input.clear(),
            AddOutcome::Blank => {}
        }
        outcome
    }

    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) -> Action {
        if self.editing {
            return self.handle_editing_key(key);
        }

        match key.code {
            KeyCode::Char('t') => self.set_mode(Mode::Truth),
            KeyCode::Char('d') => self.set_mode(Mode::Dare),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => self.set_mode(self.mode.toggle()),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.pick(rng);
            }
            KeyCode::Char('a') | KeyCode::Char('i') => self.editing = true,
            _ => {}
        }
        Action::None
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.editing = false;
                Action::None
            }
            KeyCode::Enter => {
                if self.submit().is_added() {
                    self.editing = false;
                    Action::SaveCustoms(self.customs.clone())
                } else {
                    Action::None
                }
            }
            _ => {
                self.input.handle_key(key);
                Action::None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Mode chips
                Constraint::Length(3), // Input
                Constraint::Length(4), // Current prompt
                Constraint::Min(3),    // Custom list
                Constraint::Min(3),    // Builtin list
            ])
            .split(area);

        let chip = |mode: Mode| {
            let label = format!(" {} ", mode.label());
            if self.mode == mode {
                Span::styled(label, theme.highlighted())
            } else {
                Span::styled(label, theme.dimmed())
            }
        };
        let chips = Paragraph::new(Line::from(vec![
            chip(Mode::Truth),
            Span::raw("  "),
            chip(Mode::Dare),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(chips, chunks[0]);

        let input_label = format!(" Tulis {} kamu ", self.mode.label());
        let input_text = if self.editing {
            let (before, after) = self.input.split_at_cursor();
            Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled("│", theme.keybind()),
                Span::raw(after.to_string()),
            ])
        } else if self.input.is_empty() {
            Line::from(Span::styled("a: tambah tantangan", theme.dimmed()))
        } else {
            Line::from(self.input.value().to_string())
        };
        let input = Paragraph::new(input_text).style(theme.input()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if self.editing { theme.border_focused() } else { theme.border() })
                .title(Span::styled(input_label, theme.title())),
        );
        frame.render_widget(input, chunks[1]);

        let current = match &self.current {
            Some(prompt) => Paragraph::new(Span::styled(prompt.as_str(), theme.title())),
            None => Paragraph::new(Span::styled("Enter: Ambil Tantangan", theme.dimmed())),
        }
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme.card())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border()),
        );
        frame.render_widget(current, chunks[2]);

        let custom = self.customs.list(self.mode);
        let custom_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border())
            .title(Span::styled(" Koleksi Kamu ", theme.bold()));
        if custom.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "Belum ada. Tambahkan lewat kolom di atas.",
                theme.dimmed(),
            ))
            .block(custom_block);
            frame.render_widget(empty, chunks[3]);
        } else {
            frame.render_widget(bullet_list(custom.iter().map(String::as_str), theme).block(custom_block), chunks[3]);
        }

        let builtin = bullet_list(self.mode.builtin().iter().copied(), theme).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(theme.border())
                .title(Span::styled(" Ide lainnya ", theme.bold())),
        );
        frame.render_widget(builtin, chunks[4]);
    }
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>, theme: &Theme) -> List<'a> {
    let items: Vec<ListItem> = items
        .map(|item| ListItem::new(Line::from(Span::styled(format!("• {}", item), theme.text()))))
        .collect();
    List::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BUILTIN_DARES, BUILTIN_TRUTHS};
    use crossterm::event::KeyModifiers;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(view: &mut TruthDareView, rng: &mut StdRng, text: &str) -> Action {
        view.handle_key(key(KeyCode::Char('a')), rng);
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)), rng);
        }
        view.handle_key(key(KeyCode::Enter), rng)
    }

    #[test]
    fn test_mode_switching() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut view = TruthDareView::default();
        assert_eq!(view.mode, Mode::Truth);

        view.handle_key(key(KeyCode::Char('d')), &mut rng);
        assert_eq!(view.mode, Mode::Dare);
        view.handle_key(key(KeyCode::Right), &mut rng);
        assert_eq!(view.mode, Mode::Truth);
    }

    #[test]
    fn test_pick_uses_active_mode() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut view = TruthDareView::default();

        for _ in 0..20 {
            let picked = view.pick(&mut rng).to_string();
            assert!(BUILTIN_TRUTHS.contains(&picked.as_str()));
        }

        view.set_mode(Mode::Dare);
        view.handle_key(key(KeyCode::Enter), &mut rng);
        assert!(BUILTIN_DARES.contains(&view.current.as_deref().unwrap()));
    }

    #[test]
    fn test_add_emits_save() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut view = TruthDareView::default();

        let action = type_text(&mut view, &mut rng, " Ceritakan mimpimu ");
        let mut expected = CustomPromptSet::new();
        expected.truths.push("Ceritakan mimpimu".into());
        assert_eq!(action, Action::SaveCustoms(expected));
        assert!(view.input.is_empty());
        assert!(!view.editing);
    }

    #[test]
    fn test_duplicate_clears_input_without_save() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut view = TruthDareView::default();
        type_text(&mut view, &mut rng, "Sama");

        let action = type_text(&mut view, &mut rng, "Sama");
        assert_eq!(action, Action::None);
        assert!(view.input.is_empty());
        assert_eq!(view.customs.truths, vec!["Sama"]);
    }

    #[test]
    fn test_blank_keeps_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut view = TruthDareView::default();

        let action = type_text(&mut view, &mut rng, "   ");
        assert_eq!(action, Action::None);
        assert_eq!(view.input.value(), "   ");
        assert!(view.editing);
        assert!(view.customs.truths.is_empty());
    }

    #[test]
    fn test_editing_swallows_mode_keys() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut view = TruthDareView::default();
        view.handle_key(key(KeyCode::Char('a')), &mut rng);
        view.handle_key(key(KeyCode::Char('d')), &mut rng);

        assert_eq!(view.mode, Mode::Truth);
        assert_eq!(view.input.value(), "d");

        view.handle_key(key(KeyCode::Esc), &mut rng);
        assert!(!view.editing);
    }
}
