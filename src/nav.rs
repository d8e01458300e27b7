//! Screen routing
//!
//! A back stack of screens, each entry carrying its own view state. Home is
//! the start destination and never leaves the bottom of the stack.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Every destination in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Wheel,
    Truth,
    Counter,
    Settings,
}

impl Screen {
    /// Bottom bar order
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::Wheel,
        Screen::Truth,
        Screen::Counter,
        Screen::Settings,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Wheel => "wheel",
            Screen::Truth => "truth",
            Screen::Counter => "counter",
            Screen::Settings => "settings",
        }
    }

    /// Bottom bar label
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Beranda",
            Screen::Wheel => "Wheel",
            Screen::Truth => "Truth/Dare",
            Screen::Counter => "Counter",
            Screen::Settings => "Pengaturan",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Home => "⌂",
            Screen::Wheel => "↻",
            Screen::Truth => "?",
            Screen::Counter => "♥",
            Screen::Settings => "⚙",
        }
    }

    /// Bottom bar shortcut (1-5)
    pub fn from_shortcut(c: char) -> Option<Screen> {
        let idx = c.to_digit(10)? as usize;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// One back stack entry
#[derive(Debug, Clone)]
pub struct Entry<S> {
    pub screen: Screen,
    pub state: S,
}

/// Stack router with per-screen saved state for bottom bar switching
#[derive(Debug, Clone)]
pub struct Router<S> {
    stack: Vec<Entry<S>>,
    saved: HashMap<Screen, S>,
    unsaved: HashSet<Screen>,
}

impl<S> Router<S> {
    /// Start at Home with the given state
    pub fn new(home: S) -> Self {
        Self {
            stack: vec![Entry {
                screen: Screen::Home,
                state: home,
            }],
            saved: HashMap::new(),
            unsaved: HashSet::new(),
        }
    }

    /// Never keep state for `screen` once it is popped
    pub fn without_saved_state(mut self, screen: Screen) -> Self {
        self.unsaved.insert(screen);
        self
    }

    pub fn current(&self) -> Screen {
        self.top().screen
    }

    fn top(&self) -> &Entry<S> {
        // The start entry is never popped
        &self.stack[self.stack.len() - 1]
    }

    pub fn state(&self) -> &S {
        &self.top().state
    }

    pub fn state_mut(&mut self) -> &mut S {
        let last = self.stack.len() - 1;
        &mut self.stack[last].state
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Screens from bottom to top
    pub fn screens(&self) -> Vec<Screen> {
        self.stack.iter().map(|e| e.screen).collect()
    }

    pub fn has_saved(&self, screen: Screen) -> bool {
        self.saved.contains_key(&screen)
    }

    /// Push a fresh entry. Returns false if `screen` is already current.
    pub fn navigate(&mut self, screen: Screen, fresh: impl FnOnce() -> S) -> bool {
        if self.current() == screen {
            return false;
        }
        self.stack.push(Entry {
            screen,
            state: fresh(),
        });
        true
    }

    /// Bottom bar selection: pop to Home saving state, then restore or create
    /// the target. Returns false if `screen` is already current.
    pub fn select_tab(&mut self, screen: Screen, fresh: impl FnOnce() -> S) -> bool {
        if self.current() == screen {
            return false;
        }

        while self.stack.len() > 1 {
            if let Some(entry) = self.stack.pop() {
                if !self.unsaved.contains(&entry.screen) {
                    self.saved.insert(entry.screen, entry.state);
                }
            }
        }

        if screen == Screen::Home {
            return true;
        }

        let state = self.saved.remove(&screen).unwrap_or_else(fresh);
        self.stack.push(Entry { screen, state });
        true
    }

    /// Pop the top entry. Returns false at the start destination.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}
