//! Data models for LovePlay
//!
//! Settings, custom prompt sets and the builtin content shipped with the app.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::prefs::{keys, PreferenceStore};

// =============================================================================
// Builtin Content
// =============================================================================

/// Date ideas on the wheel
pub const WHEEL_IDEAS: &[&str] = &[
    "Nonton film romantis",
    "Masak bareng",
    "Piknik sederhana",
    "Jalan sore sambil foto-foto",
    "Main board game",
    "Ngopi di kafe baru",
    "Baca buku berdua",
    "Olahraga ringan",
    "Belajar resep baru",
    "Video call sambil makan",
];

pub const BUILTIN_TRUTHS: &[&str] = &[
    "Apa hal kecil yang bikin kamu bahagia?",
    "Kapan pertama kali kamu merasa sangat dicintai?",
    "Sifatku yang paling kamu suka?",
    "Apa rahasia kecil yang belum kamu ceritakan?",
    "Momen paling lucu bareng aku?",
];

pub const BUILTIN_DARES: &[&str] = &[
    "Kirim voice note bilang 'sayang' dengan gaya lucu",
    "Tiru gaya fotoku favoritmu",
    "Peluk aku 30 detik",
    "Buat pantun romantis spontan",
    "Nyanyikan lagu cinta 10 detik",
];

/// Shown when a pick has nothing to choose from
pub const EMPTY_POOL_FALLBACK: &str = "Belum ada tantangan. Tambahkan dulu ya!";

pub const DEFAULT_LEFT_NAME: &str = "Aku";
pub const DEFAULT_RIGHT_NAME: &str = "Kamu";

// =============================================================================
// Mode
// =============================================================================

/// Truth or dare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Truth,
    Dare,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Mode::Truth => Mode::Dare,
            Mode::Dare => Mode::Truth,
        }
    }

    /// Builtin prompts for this mode
    pub fn builtin(self) -> &'static [&'static str] {
        match self {
            Mode::Truth => BUILTIN_TRUTHS,
            Mode::Dare => BUILTIN_DARES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Truth => "Truth",
            Mode::Dare => "Dare",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// App Settings
// =============================================================================

/// Names and accent colour shared by every screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub left_name: String,
    pub right_name: String,
    pub accent_index: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            left_name: DEFAULT_LEFT_NAME.to_string(),
            right_name: DEFAULT_RIGHT_NAME.to_string(),
            accent_index: 0,
        }
    }
}

impl AppSettings {
    pub fn new(left_name: impl Into<String>, right_name: impl Into<String>, accent_index: i32) -> Self {
        Self {
            left_name: left_name.into(),
            right_name: right_name.into(),
            accent_index,
        }
    }

    /// Load from the store, falling back to defaults per key
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let defaults = Self::default();
        let accent = store.get_int(keys::ACCENT_INDEX, defaults.accent_index as i64);

        Self {
            left_name: store.get_string(keys::LEFT_NAME, &defaults.left_name),
            right_name: store.get_string(keys::RIGHT_NAME, &defaults.right_name),
            // Values beyond i32 can only resolve to the first palette entry anyway
            accent_index: i32::try_from(accent).unwrap_or(-1),
        }
    }

    /// Write all three values
    pub fn persist(&self, store: &mut dyn PreferenceStore) {
        store.set_string(keys::LEFT_NAME, &self.left_name);
        store.set_string(keys::RIGHT_NAME, &self.right_name);
        store.set_int(keys::ACCENT_INDEX, self.accent_index as i64);
    }

    /// Home screen greeting
    pub fn greeting(&self) -> String {
        format!("Hai {} ❤ {}!", self.left_name, self.right_name)
    }
}

// =============================================================================
// Custom Prompts
// =============================================================================

/// Result of adding a custom prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Stored (holds the trimmed text)
    Added(String),
    /// Empty after trimming
    Blank,
    /// Already in the custom list
    Duplicate,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// User-added truths and dares, insertion ordered, never blank or duplicated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPromptSet {
    pub truths: Vec<String>,
    pub dares: Vec<String>,
}

impl CustomPromptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both sets, dropping blank entries
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let read = |key: &str| -> Vec<String> {
            store
                .get_string_set(key, BTreeSet::new())
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect()
        };

        Self {
            truths: read(keys::CUSTOM_TRUTHS),
            dares: read(keys::CUSTOM_DARES),
        }
    }

    /// Write both sets
    pub fn persist(&self, store: &mut dyn PreferenceStore) {
        store.set_string_set(keys::CUSTOM_TRUTHS, self.truths.iter().cloned().collect());
        store.set_string_set(keys::CUSTOM_DARES, self.dares.iter().cloned().collect());
    }

    pub fn list(&self, mode: Mode) -> &[String] {
        match mode {
            Mode::Truth => &self.truths,
            Mode::Dare => &self.dares,
        }
    }

    fn list_mut(&mut self, mode: Mode) -> &mut Vec<String> {
        match mode {
            Mode::Truth => &mut self.truths,
            Mode::Dare => &mut self.dares,
        }
    }

    /// Trim and append unless blank or already present (case-sensitive)
    pub fn add(&mut self, mode: Mode, input: &str) -> AddOutcome {
        let text = input.trim();
        if text.is_empty() {
            return AddOutcome::Blank;
        }

        let list = self.list_mut(mode);
        if list.iter().any(|existing| existing == text) {
            return AddOutcome::Duplicate;
        }

        list.push(text.to_string());
        AddOutcome::Added(text.to_string())
    }

    /// Builtin prompts followed by custom ones
    pub fn pool(&self, mode: Mode) -> Vec<&str> {
        mode.builtin()
            .iter()
            .copied()
            .chain(self.list(mode).iter().map(String::as_str))
            .collect()
    }

    /// Random prompt from the pool, or the fallback message when it is empty
    pub fn pick<R: Rng + ?Sized>(&self, mode: Mode, rng: &mut R) -> String {
        pick_from(&self.pool(mode), rng)
    }
}

/// Uniform pick with the empty-pool fallback
pub fn pick_from<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> String {
    pool.choose(rng)
        .map(|s| s.to_string())
        .unwrap_or_else(|| EMPTY_POOL_FALLBACK.to_string())
}
