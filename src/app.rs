//! App state and core application logic
//!
//! Owns the committed settings and the preference store, routes key events to
//! the active screen and applies the change requests screens emit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use crate::models::{AppSettings, CustomPromptSet};
use crate::nav::{Router, Screen};
use crate::prefs::PreferenceStore;
use crate::ui::counter::CounterView;
use crate::ui::home::HomeView;
use crate::ui::settings::SettingsView;
use crate::ui::truth_dare::TruthDareView;
use crate::ui::wheel::{WheelView, DEFAULT_SPIN_DURATION};
use crate::ui::Theme;

// =============================================================================
// Actions
// =============================================================================

/// Change requests emitted by screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Open a screen from a button (fresh entry)
    Open(Screen),
    /// Commit and persist new settings
    SaveSettings(AppSettings),
    /// Persist both custom prompt sets
    SaveCustoms(CustomPromptSet),
}

// =============================================================================
// Views
// =============================================================================

/// Per-entry screen state
#[derive(Debug, Clone)]
pub enum View {
    Home(HomeView),
    Wheel(WheelView),
    TruthDare(TruthDareView),
    Counter(CounterView),
    Settings(SettingsView),
}

impl View {
    /// Whether the view is capturing text input
    pub fn is_editing(&self) -> bool {
        match self {
            View::TruthDare(v) => v.editing,
            View::Settings(v) => v.editing,
            _ => false,
        }
    }
}

/// Fresh view for `screen`. Truth/Dare loads the custom prompts on mount.
fn make_view(screen: Screen, settings: &AppSettings, store: &dyn PreferenceStore, spin: Duration) -> View {
    match screen {
        Screen::Home => View::Home(HomeView::new()),
        Screen::Wheel => View::Wheel(WheelView::new(spin)),
        Screen::Truth => View::TruthDare(TruthDareView::new(CustomPromptSet::load(store))),
        Screen::Counter => View::Counter(CounterView::new()),
        Screen::Settings => View::Settings(SettingsView::new(settings)),
    }
}

// =============================================================================
// Options
// =============================================================================

/// Startup options resolved from config and CLI
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub dark: bool,
    pub spin_duration: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            dark: true,
            spin_duration: DEFAULT_SPIN_DURATION,
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

pub struct App {
    /// Committed settings, shared by every screen
    pub settings: AppSettings,
    store: Box<dyn PreferenceStore>,
    pub router: Router<View>,
    /// Whether the app is running
    pub running: bool,
    pub dark: bool,
    pub spin_duration: Duration,
    /// One-line message for the status bar, cleared on the next key
    pub notice: Option<String>,
    rng: StdRng,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("settings", &self.settings)
            .field("screen", &self.router.current())
            .field("running", &self.running)
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Load settings once from `store` and start on Home
    pub fn new(store: Box<dyn PreferenceStore>, options: AppOptions) -> Self {
        let settings = AppSettings::load(store.as_ref());
        log::info!(
            "Loaded settings: {} / {} (accent {})",
            settings.left_name,
            settings.right_name,
            settings.accent_index
        );

        Self {
            settings,
            store,
            router: Router::new(View::Home(HomeView::new())).without_saved_state(Screen::Settings),
            running: true,
            dark: options.dark,
            spin_duration: options.spin_duration,
            notice: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source (deterministic tests)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn theme(&self) -> Theme {
        Theme::new(self.settings.accent_index, self.dark)
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    pub fn view(&self) -> &View {
        self.router.state()
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn PreferenceStore {
        self.store.as_mut()
    }

    pub fn is_editing(&self) -> bool {
        self.view().is_editing()
    }

    /// Whether the wheel on screen is mid-spin
    pub fn is_animating(&self) -> bool {
        matches!(self.view(), View::Wheel(w) if w.is_spinning())
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Button navigation: push a fresh entry
    pub fn open(&mut self, screen: Screen) -> bool {
        let (settings, store, spin) = (&self.settings, self.store.as_ref(), self.spin_duration);
        self.router
            .navigate(screen, || make_view(screen, settings, store, spin))
    }

    /// Bottom bar navigation: pop to Home, restore saved state
    pub fn select_tab(&mut self, screen: Screen) -> bool {
        let (settings, store, spin) = (&self.settings, self.store.as_ref(), self.spin_duration);
        let changed = self
            .router
            .select_tab(screen, || make_view(screen, settings, store, spin));
        self.reload_customs();
        changed
    }

    pub fn back(&mut self) -> bool {
        let changed = self.router.back();
        self.reload_customs();
        changed
    }

    /// A Truth/Dare entry coming back on top rereads the custom prompts,
    /// since another entry may have added some meanwhile.
    fn reload_customs(&mut self) {
        if let View::TruthDare(view) = self.router.state_mut() {
            view.customs = CustomPromptSet::load(self.store.as_ref());
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // -------------------------------------------------------------------------
    // Updates
    // -------------------------------------------------------------------------

    /// Apply a screen's change request
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Open(screen) => {
                self.open(screen);
            }
            Action::SaveSettings(settings) => {
                settings.persist(self.store.as_mut());
                log::info!(
                    "Saved settings: {} / {} (accent {})",
                    settings.left_name,
                    settings.right_name,
                    settings.accent_index
                );
                self.settings = settings;
                self.notice = Some("Tersimpan ♥".to_string());
            }
            Action::SaveCustoms(customs) => {
                customs.persist(self.store.as_mut());
                log::debug!(
                    "Saved custom prompts: {} truth(s), {} dare(s)",
                    customs.truths.len(),
                    customs.dares.len()
                );
            }
        }
    }

    /// Advance animations
    pub fn tick(&mut self, now: Instant) {
        if let View::Wheel(wheel) = self.router.state_mut() {
            wheel.tick(now);
        }
    }

    /// Write pending preference changes; failures are logged and retried later
    pub fn flush_preferences(&mut self) {
        if let Err(e) = self.store.flush() {
            log::warn!("Failed to save preferences: {}", e);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.handle_key_at(key, Instant::now())
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        // Text input gets every key, Esc included
        if !self.is_editing() {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    return true;
                }
                KeyCode::Esc => return self.back(),
                KeyCode::Char(c) => {
                    if let Some(screen) = Screen::from_shortcut(c) {
                        self.select_tab(screen);
                        return true;
                    }
                }
                _ => {}
            }
        }

        let rng = &mut self.rng;
        let (handled, action) = match self.router.state_mut() {
            View::Home(view) => {
                let action = view.handle_key(key);
                (action != Action::None, action)
            }
            View::Wheel(view) => (view.handle_key(key, rng, now), Action::None),
            View::TruthDare(view) => (true, view.handle_key(key, rng)),
            View::Counter(view) => (view.handle_key(key), Action::None),
            View::Settings(view) => (true, view.handle_key(key)),
        };

        self.apply(action);
        handled
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
