//! End-to-end flow tests for LovePlay
//!
//! Drives the app with key events the way a user would and checks what
//! survives a restart through the file-backed preference store.

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use loveplay::models::{BUILTIN_TRUTHS, WHEEL_IDEAS};
use loveplay::{App, AppOptions, AppSettings, CustomPromptSet, FilePreferences, Mode, Screen, View};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        app.handle_key(key(*code));
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn open_app(path: &Path) -> App {
    App::new(Box::new(FilePreferences::open(path)), AppOptions::default())
        .with_rng(StdRng::seed_from_u64(2024))
}

/// Focus a name field, clear it and type a new value
fn replace_name(app: &mut App, value: &str) {
    press(app, &[KeyCode::Enter]);
    for _ in 0..16 {
        press(app, &[KeyCode::Backspace]);
    }
    type_text(app, value);
    press(app, &[KeyCode::Enter]);
}

/// Start editing, type a prompt and submit it
fn add_prompt(app: &mut App, text: &str) {
    press(app, &[KeyCode::Char('a')]);
    type_text(app, text);
    press(app, &[KeyCode::Enter]);
}

// =============================================================================
// Settings Flow
// =============================================================================

#[test]
fn test_settings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);
    assert_eq!(app.settings.greeting(), "Hai Aku ❤ Kamu!");

    app.handle_key(key(KeyCode::Char('5')));
    assert_eq!(app.screen(), Screen::Settings);

    replace_name(&mut app, "A");
    press(&mut app, &[KeyCode::Down]);
    replace_name(&mut app, "B");
    press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Right]);
    press(&mut app, &[KeyCode::Char('s')]);

    assert_eq!(app.settings, AppSettings::new("A", "B", 2));
    assert_eq!(app.notice.as_deref(), Some("Tersimpan ♥"));
    app.flush_preferences();
    drop(app);

    let app = open_app(&path);
    assert_eq!(app.settings.greeting(), "Hai A ❤ B!");
    assert_eq!(app.settings.accent_index, 2);
    assert_eq!(app.theme().primary, loveplay::ui::theme::ACCENT_PALETTE[2]);
}

#[test]
fn test_save_from_save_button() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);
    app.select_tab(Screen::Settings);
    replace_name(&mut app, "Budi");
    press(&mut app, &[KeyCode::Down]);
    replace_name(&mut app, "Sari");
    press(&mut app, &[KeyCode::Down]);
    press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right]);
    press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    app.flush_preferences();

    let stored = AppSettings::load(&FilePreferences::open(&path));
    assert_eq!(stored, AppSettings::new("Budi", "Sari", 3));
}

#[test]
fn test_unsaved_settings_are_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);
    app.select_tab(Screen::Settings);
    replace_name(&mut app, "Draft");

    // Leave without saving, then come back
    app.select_tab(Screen::Home);
    app.select_tab(Screen::Settings);

    let View::Settings(view) = app.view() else {
        panic!("Expected settings view");
    };
    assert_eq!(view.left.value(), "Aku");
    assert_eq!(app.settings, AppSettings::default());
}

// =============================================================================
// Truth or Dare Flow
// =============================================================================

#[test]
fn test_custom_truth_persists_and_joins_pool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);
    app.open(Screen::Truth);
    press(&mut app, &[KeyCode::Char('a')]);
    type_text(&mut app, "  Apa mimpi terbesarmu?  ");
    press(&mut app, &[KeyCode::Enter]);
    app.flush_preferences();
    drop(app);

    let store = FilePreferences::open(&path);
    let customs = CustomPromptSet::load(&store);
    assert_eq!(customs.truths, vec!["Apa mimpi terbesarmu?"]);
    assert!(customs.dares.is_empty());

    let pool = customs.pool(Mode::Truth);
    assert_eq!(pool.len(), BUILTIN_TRUTHS.len() + 1);

    let mut rng = StdRng::seed_from_u64(11);
    let seen_custom = (0..200).any(|_| customs.pick(Mode::Truth, &mut rng) == "Apa mimpi terbesarmu?");
    assert!(seen_custom);
}

#[test]
fn test_reopened_truth_screen_loads_customs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);
    app.open(Screen::Truth);
    press(&mut app, &[KeyCode::Char('d'), KeyCode::Char('a')]);
    type_text(&mut app, "Menari bersama");
    press(&mut app, &[KeyCode::Enter]);
    app.flush_preferences();
    drop(app);

    let mut app = open_app(&path);
    app.open(Screen::Truth);
    let View::TruthDare(view) = app.view() else {
        panic!("Expected truth/dare view");
    };
    assert_eq!(view.customs.dares, vec!["Menari bersama"]);
    assert_eq!(view.mode, Mode::Truth);
}

#[test]
fn test_blank_prompt_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);
    app.open(Screen::Truth);
    press(&mut app, &[KeyCode::Char('a')]);
    type_text(&mut app, "   ");
    press(&mut app, &[KeyCode::Enter]);
    app.flush_preferences();

    assert!(app.is_editing());
    assert!(!path.exists());
}

#[test]
fn test_restored_truth_tab_keeps_prompts_added_elsewhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loveplay.toml");

    let mut app = open_app(&path);

    // Tab entry, parked when switching back to Home
    press(&mut app, &[KeyCode::Char('3')]);
    add_prompt(&mut app, "X");
    press(&mut app, &[KeyCode::Char('1')]);

    // A fresh entry from the Home button
    press(&mut app, &[KeyCode::Char('t')]);
    add_prompt(&mut app, "Y");
    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.screen(), Screen::Home);

    // The parked tab comes back and adds one more
    press(&mut app, &[KeyCode::Char('3')]);
    let View::TruthDare(view) = app.view() else {
        panic!("Expected truth/dare view");
    };
    assert_eq!(view.customs.truths, vec!["X", "Y"]);
    add_prompt(&mut app, "Z");
    app.flush_preferences();
    drop(app);

    let customs = CustomPromptSet::load(&FilePreferences::open(&path));
    assert_eq!(customs.truths, vec!["X", "Y", "Z"]);
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_button_navigation_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("loveplay.toml"));

    app.handle_key(key(KeyCode::Char('w')));
    assert_eq!(app.screen(), Screen::Wheel);
    assert_eq!(app.router.depth(), 2);

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.screen(), Screen::Home);

    // Back at the start destination does nothing
    assert!(!app.handle_key(key(KeyCode::Esc)));
    assert!(app.running);
}

#[test]
fn test_tab_switch_keeps_counter_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("loveplay.toml"));

    app.handle_key(key(KeyCode::Char('4')));
    press(&mut app, &[KeyCode::Left, KeyCode::Left, KeyCode::Left, KeyCode::Right]);

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.screen(), Screen::Wheel);
    assert_eq!(app.router.depth(), 2);

    app.handle_key(key(KeyCode::Char('4')));
    let View::Counter(counter) = app.view() else {
        panic!("Expected counter view");
    };
    assert_eq!(counter.counts(), (3, 1));
}

#[test]
fn test_reselecting_home_is_single_top() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("loveplay.toml"));

    app.handle_key(key(KeyCode::Char('c')));
    app.handle_key(key(KeyCode::Char('1')));
    app.handle_key(key(KeyCode::Char('1')));
    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.router.depth(), 1);
}

#[test]
fn test_quit_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("loveplay.toml"));
    app.handle_key(key(KeyCode::Char('q')));
    assert!(!app.running);

    let mut app = open_app(&dir.path().join("loveplay.toml"));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}

// =============================================================================
// Wheel
// =============================================================================

#[test]
fn test_spin_settles_within_one_turn() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("loveplay.toml"));
    app.open(Screen::Wheel);

    let start = Instant::now();
    app.handle_key_at(key(KeyCode::Enter), start);
    assert!(app.is_animating());

    app.tick(start + Duration::from_millis(900));
    assert!(app.is_animating());

    app.tick(start + Duration::from_millis(1850));
    assert!(!app.is_animating());

    let View::Wheel(wheel) = app.view() else {
        panic!("Expected wheel view");
    };
    assert!((0.0..360.0).contains(&wheel.rotation()));
    assert!(WHEEL_IDEAS.contains(&wheel.selected().unwrap()));
}

#[test]
fn test_respin_mid_flight_restarts() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(&dir.path().join("loveplay.toml"));
    app.open(Screen::Wheel);

    let start = Instant::now();
    app.handle_key_at(key(KeyCode::Enter), start);
    app.handle_key_at(key(KeyCode::Enter), start + Duration::from_millis(500));

    // The second spin runs its own full duration
    app.tick(start + Duration::from_millis(1900));
    assert!(app.is_animating());
    app.tick(start + Duration::from_millis(2350));
    assert!(!app.is_animating());
}
