//! Preference store
//!
//! A small key-value port for strings, ints and string sets, with a
//! file-backed adapter (TOML under the data dir) and an in-memory one.
//!
//! Writes are write-behind: `put` updates the in-memory view at once and the
//! owner calls [`PreferenceStore::flush`] later. Failures never reach the user.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Namespace for every LovePlay preference
pub const NAMESPACE: &str = "loveplay";

/// Preference keys
pub mod keys {
    pub const LEFT_NAME: &str = "leftName";
    pub const RIGHT_NAME: &str = "rightName";
    pub const ACCENT_INDEX: &str = "accentIndex";
    pub const CUSTOM_TRUTHS: &str = "customTruths";
    pub const CUSTOM_DARES: &str = "customDares";
}

/// Preference store errors
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Failed to decode preferences: {0}")]
    Decode(#[from] toml::de::Error),
}

/// A single stored value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i64),
    Text(String),
    Set(BTreeSet<String>),
}

/// Key-value persistence port
pub trait PreferenceStore {
    /// Raw lookup
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Raw write (visible to `get` immediately, durable after `flush`)
    fn put(&mut self, key: &str, value: PrefValue);

    /// Persist pending writes
    fn flush(&mut self) -> Result<(), PrefsError> {
        Ok(())
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(PrefValue::Text(s)) => s,
            _ => default.to_string(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.put(key, PrefValue::Text(value.to_string()));
    }

    fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(PrefValue::Int(n)) => n,
            _ => default,
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.put(key, PrefValue::Int(value));
    }

    fn get_string_set(&self, key: &str, default: BTreeSet<String>) -> BTreeSet<String> {
        match self.get(key) {
            Some(PrefValue::Set(set)) => set,
            _ => default,
        }
    }

    fn set_string_set(&mut self, key: &str, value: BTreeSet<String>) {
        self.put(key, PrefValue::Set(value));
    }
}

// =============================================================================
// In-memory adapter
// =============================================================================

/// Volatile store, mostly for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, PrefValue>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }
}

// =============================================================================
// File adapter
// =============================================================================

/// TOML-file store (~/.local/share/loveplay/loveplay.toml by default)
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, PrefValue>,
    dirty: bool,
}

impl FilePreferences {
    /// Default store location under the platform data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join(NAMESPACE).join(format!("{}.toml", NAMESPACE)))
    }

    /// Open the store at `path`. Missing or unreadable files start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("Ignoring preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        log::debug!("Loaded {} preference(s) from {}", values.len(), path.display());

        Self {
            path,
            values,
            dirty: false,
        }
    }

    fn read(path: &Path) -> Result<BTreeMap<String, PrefValue>, PrefsError> {
        match std::fs::read_to_string(path) {
            Ok(s) => Ok(toml::from_str(&s)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether writes are waiting for a flush
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), PrefsError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write next to the target, then swap it in
        let encoded = toml::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, encoded)?;
        std::fs::rename(&tmp, &self.path)?;

        self.dirty = false;
        log::debug!("Flushed preferences to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_keys() {
        let store = MemoryPreferences::new();
        assert_eq!(store.get_string(keys::LEFT_NAME, "Aku"), "Aku");
        assert_eq!(store.get_int(keys::ACCENT_INDEX, 0), 0);
        assert!(store.get_string_set(keys::CUSTOM_DARES, BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_wrong_type_reads_default() {
        let mut store = MemoryPreferences::new();
        store.set_string(keys::ACCENT_INDEX, "three");
        assert_eq!(store.get_int(keys::ACCENT_INDEX, 0), 0);

        store.set_int(keys::LEFT_NAME, 7);
        assert_eq!(store.get_string(keys::LEFT_NAME, "Aku"), "Aku");
    }

    #[test]
    fn test_memory_round_trip() {
        let mut store = MemoryPreferences::new();
        store.set_string(keys::RIGHT_NAME, "Sari");
        store.set_int(keys::ACCENT_INDEX, 4);

        let set: BTreeSet<String> = ["a".to_string(), "b".to_string()].into();
        store.set_string_set(keys::CUSTOM_TRUTHS, set.clone());

        assert_eq!(store.get_string(keys::RIGHT_NAME, "Kamu"), "Sari");
        assert_eq!(store.get_int(keys::ACCENT_INDEX, 0), 4);
        assert_eq!(store.get_string_set(keys::CUSTOM_TRUTHS, BTreeSet::new()), set);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_file_store_is_dirty_until_flush() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("loveplay.toml");

        let mut store = FilePreferences::open(&path);
        assert!(!store.is_dirty());

        store.set_string(keys::LEFT_NAME, "Budi");
        assert!(store.is_dirty());
        assert!(!path.exists());

        store.flush().unwrap();
        assert!(!store.is_dirty());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loveplay.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let store = FilePreferences::open(&path);
        assert_eq!(store.get_string(keys::LEFT_NAME, "Aku"), "Aku");
    }

    #[test]
    fn test_default_path_uses_namespace() {
        if let Some(path) = FilePreferences::default_path() {
            assert!(path.ends_with("loveplay/loveplay.toml"));
        }
    }
}
