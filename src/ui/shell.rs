//! App chrome: header, active screen, bottom navigation bar, status line

use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, View};
use crate::nav::Screen;
use crate::ui::Theme;

/// Render the whole app
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = app.theme();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(theme.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Bottom bar
            Constraint::Length(1), // Status line
        ])
        .split(area);

    render_header(frame, chunks[0], &theme);
    render_content(frame, chunks[1], app, &theme);
    render_nav_bar(frame, chunks[2], app.screen(), &theme);
    render_status_bar(frame, chunks[3], app, &theme);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) {
    let logo = Paragraph::new(Line::from(vec![
        Span::styled("LovePlay", theme.title()),
        Span::styled(" ❤", theme.title()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border()),
    );
    frame.render_widget(logo, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let inner = area.inner(Margin::new(2, 1));
    match app.view() {
        View::Home(view) => view.render(frame, inner, theme, &app.settings),
        View::Wheel(view) => view.render(frame, inner, theme),
        View::TruthDare(view) => view.render(frame, inner, theme),
        View::Counter(view) => view.render(frame, inner, theme, &app.settings),
        View::Settings(view) => view.render(frame, inner, theme),
    }
}

/// Bottom navigation bar, one cell per screen
pub fn render_nav_bar(frame: &mut Frame, area: Rect, current: Screen, theme: &Theme) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Screen::ALL.map(|_| Constraint::Ratio(1, Screen::ALL.len() as u32)))
        .split(area);

    for (i, screen) in Screen::ALL.iter().enumerate() {
        let selected = *screen == current;
        let label = Line::from(vec![
            Span::raw(format!("{} ", screen.icon())),
            Span::raw(screen.label()),
        ]);
        let tab = Paragraph::new(vec![
            label,
            Line::from(Span::styled(format!("{}", i + 1), theme.dimmed())),
        ])
        .alignment(Alignment::Center)
        .style(if selected { theme.highlighted() } else { theme.text() })
        .block(Block::default().borders(Borders::TOP).border_style(theme.border()));
        frame.render_widget(tab, cells[i]);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(format!(" {} ", notice), theme.title())),
        None => Line::from(
            keybind_help(app)
                .iter()
                .flat_map(|(key, desc)| {
                    [
                        Span::styled(format!(" {} ", key), theme.keybind()),
                        Span::styled(format!("{} ", desc), theme.dimmed()),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
    };

    frame.render_widget(Paragraph::new(line).style(theme.status_bar()), area);
}

/// Key hints for the active screen
pub fn keybind_help(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.is_editing() {
        return vec![("↵", "selesai"), ("ESC", "batal")];
    }

    let mut help = match app.view() {
        View::Home(_) => vec![("↑↓", "pilih"), ("↵", "buka"), ("w/t/c", "game")],
        View::Wheel(_) => vec![("↵", "putar roda")],
        View::TruthDare(_) => vec![("t/d", "mode"), ("↵", "ambil"), ("a", "tambah")],
        View::Counter(_) => vec![("←", "kiri"), ("→", "kanan"), ("r", "reset")],
        View::Settings(_) => vec![("↑↓", "pilih"), ("↵", "ubah"), ("←→", "warna"), ("s", "simpan")],
    };
    help.extend([("1-5", "menu"), ("ESC", "kembali"), ("q", "keluar")]);
    help
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::prefs::MemoryPreferences;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_every_screen() {
        let mut app = App::new(Box::new(MemoryPreferences::new()), AppOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        for screen in Screen::ALL {
            app.select_tab(screen);
            terminal.draw(|frame| render(frame, &app)).unwrap();
            let text = screen_text(&terminal);
            assert!(text.contains("LovePlay"), "{:?} missing header", screen);
            assert!(text.contains("Pengaturan"), "{:?} missing nav bar", screen);
        }
    }

    #[test]
    fn test_renders_small_terminal() {
        let app = App::new(Box::new(MemoryPreferences::new()), AppOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }

    #[test]
    fn test_help_switches_while_editing() {
        let mut app = App::new(Box::new(MemoryPreferences::new()), AppOptions::default());
        app.select_tab(Screen::Truth);
        assert!(keybind_help(&app).contains(&("a", "tambah")));

        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('a'),
            crossterm::event::KeyModifiers::empty(),
        ));
        assert_eq!(keybind_help(&app)[0], ("↵", "selesai"));
    }
}
