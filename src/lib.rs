//! LovePlay - couples' games for the terminal
//!
//! A date-idea wheel, truth or dare with your own prompts, and a love
//! counter, personalised with both partners' names.
//!
//! # Modules
//!
//! - `prefs` - Key-value preference store (file and in-memory)
//! - `models` - Settings, custom prompts, builtin content
//! - `anim` - Tweening for the wheel spin
//! - `nav` - Screens and the back stack router
//! - `ui` - TUI screens and theme
//! - `app` - Application state and key handling
//! - `config`, `cli`, `commands` - Config file and scriptable CLI

pub mod prefs;
pub mod models;
pub mod anim;
pub mod nav;
pub mod ui;
pub mod app;
pub mod config;
pub mod cli;
pub mod commands;

// Re-export commonly used types
pub use models::{AddOutcome, AppSettings, CustomPromptSet, Mode};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore, PrefValue, PrefsError};
pub use nav::{Router, Screen};
pub use app::{Action, App, AppOptions, View};
pub use ui::{Theme, ThemeMode};
