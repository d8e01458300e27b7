//! Accent-driven theme for LovePlay
//!
//! The accent index picks one of six palette colours; the rest of the scheme
//! follows the light or dark mode.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Accent palette, in settings order
pub const ACCENT_PALETTE: [Color; 6] = [
    Color::Rgb(0xE9, 0x1E, 0x63), // pink
    Color::Rgb(0xF0, 0x62, 0x92), // pink light
    Color::Rgb(0x9C, 0x27, 0xB0), // purple
    Color::Rgb(0x03, 0xA9, 0xF4), // blue
    Color::Rgb(0xFF, 0x98, 0x00), // orange
    Color::Rgb(0x4C, 0xAF, 0x50), // green
];

/// Palette entry for an accent index; out of range means the first entry
pub fn accent_color(index: i32) -> Color {
    usize::try_from(index)
        .ok()
        .and_then(|i| ACCENT_PALETTE.get(i).copied())
        .unwrap_or(ACCENT_PALETTE[0])
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Light/dark selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolve to a dark flag. Auto reads `COLORFGBG` and defaults to dark.
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::Auto => std::env::var("COLORFGBG")
                .ok()
                .and_then(|v| background_is_dark(&v))
                .unwrap_or(true),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemeMode::Auto),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}' (expected auto, light or dark)", other)),
        }
    }
}

/// Parse a `COLORFGBG` value ("fg;bg" or "fg;default;bg")
pub fn background_is_dark(colorfgbg: &str) -> Option<bool> {
    let bg: u8 = colorfgbg.rsplit(';').next()?.trim().parse().ok()?;
    // ANSI 0-6 and 8 are the dark backgrounds
    Some(bg <= 6 || bg == 8)
}

// =============================================================================
// Theme
// =============================================================================

/// Resolved colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub primary: Color,
    pub on_primary: Color,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
}

impl Theme {
    const LIGHT_BACKGROUND: Color = Color::Rgb(0xFF, 0xFB, 0xFE);
    const LIGHT_SURFACE: Color = Color::Rgb(0xF3, 0xED, 0xF7);
    const LIGHT_TEXT: Color = Color::Rgb(0x1C, 0x1B, 0x1F);
    const LIGHT_DIM: Color = Color::Rgb(0x79, 0x74, 0x7E);

    const DARK_BACKGROUND: Color = Color::Rgb(0x1C, 0x1B, 0x1F);
    const DARK_SURFACE: Color = Color::Rgb(0x2B, 0x29, 0x30);
    const DARK_TEXT: Color = Color::Rgb(0xE6, 0xE1, 0xE5);
    const DARK_DIM: Color = Color::Rgb(0x93, 0x8F, 0x99);

    const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
    const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);

    pub fn new(accent_index: i32, dark: bool) -> Self {
        let primary = accent_color(accent_index);
        let (background, surface, text, dim) = if dark {
            (Self::DARK_BACKGROUND, Self::DARK_SURFACE, Self::DARK_TEXT, Self::DARK_DIM)
        } else {
            (Self::LIGHT_BACKGROUND, Self::LIGHT_SURFACE, Self::LIGHT_TEXT, Self::LIGHT_DIM)
        };

        Self {
            dark,
            primary,
            on_primary: readable_on(primary),
            background,
            surface,
            text,
            dim,
            border: dim,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Filled accent (selected tab, focused button)
    pub fn highlighted(&self) -> Style {
        Style::default()
            .fg(self.on_primary)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Card body
    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn input(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn keybind(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn credit(&self) -> Style {
        Style::default()
            .fg(self.on_primary)
            .bg(self.primary)
            .add_modifier(Modifier::ITALIC)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(0, true)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance (WCAG 2.0)
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Contrast ratio, 1 (same colour) to 21 (black on white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// White or black, whichever reads better on `bg`
pub fn readable_on(bg: Color) -> Color {
    let Some(bg) = color_to_rgb(bg) else {
        return Theme::WHITE;
    };
    if contrast_ratio((0xFF, 0xFF, 0xFF), bg) >= contrast_ratio((0, 0, 0), bg) {
        Theme::WHITE
    } else {
        Theme::BLACK
    }
}
