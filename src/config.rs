//! Configuration management for LovePlay
//!
//! Config is stored at ~/.config/loveplay/config.toml. Every field is
//! optional; a missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::prefs::FilePreferences;
use crate::ui::wheel::DEFAULT_SPIN_DURATION;
use crate::ui::ThemeMode;

/// Environment override for the theme mode
pub const THEME_ENV: &str = "LOVEPLAY_THEME";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// auto, light or dark
    pub theme: Option<ThemeMode>,
    /// Override for the preference store file
    pub preferences_path: Option<PathBuf>,
    /// Wheel spin duration in milliseconds
    pub spin_duration_ms: Option<u64>,
    /// Override for the log file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/loveplay/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("loveplay").join("config.toml"))
    }

    /// Load config from `path`, or the default location when `None`.
    /// A missing file reads as default; an unparsable one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::path) else {
            return Ok(Self::default());
        };
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
        };
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Theme with fallback chain:
    /// 1. `--theme` flag
    /// 2. Environment variable LOVEPLAY_THEME
    /// 3. Config file
    /// 4. Auto
    pub fn resolve_theme(&self, flag: Option<ThemeMode>) -> ThemeMode {
        let env = std::env::var(THEME_ENV).ok();
        self.resolve_theme_with(flag, env.as_deref())
    }

    /// `resolve_theme` with the environment value passed in
    pub fn resolve_theme_with(&self, flag: Option<ThemeMode>, env: Option<&str>) -> ThemeMode {
        if let Some(mode) = flag {
            return mode;
        }
        if let Some(mode) = env.and_then(|v| v.parse().ok()) {
            return mode;
        }
        self.theme.unwrap_or_default()
    }

    /// Preference store file: explicit override, config, then the data dir
    pub fn preferences_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.preferences_path.clone())
            .or_else(FilePreferences::default_path)
    }

    pub fn spin_duration(&self) -> Duration {
        self.spin_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SPIN_DURATION)
    }

    /// Log file (~/.cache/loveplay/loveplay.log unless overridden)
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("loveplay").join("loveplay.log")))
    }
}
