//! Terminal UI components
//!
//! Built with ratatui. Each screen owns its transient state and renders
//! itself; `shell` lays out the chrome around the active one.

pub mod theme;
pub mod input;
pub mod shell;
pub mod home;
pub mod wheel;
pub mod truth_dare;
pub mod counter;
pub mod settings;

pub use theme::{Theme, ThemeMode};
