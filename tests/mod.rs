//! Integration tests for LovePlay
//!
//! Tests are organized by component:
//! - prefs_test: File-backed preference store
//! - ui_test: Screen rendering and theme
//! - cli_test: Argument parsing and the scriptable commands
//! - e2e_test: Full flows through the app (settings, prompts, navigation)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
