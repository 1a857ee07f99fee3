//! Theme preference and colour palettes
//!
//! The theme is the only value persisted locally. It is stored as a single
//! string key (`theme = "dark"` or `theme = "light"`) in `preferences.toml`
//! inside the data directory, read on startup and rewritten on every toggle.

use crate::config::Config;
use crate::constants::{THEME_ICON_DARK, THEME_ICON_LIGHT};
use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored representation of the theme
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything other than `"dark"` is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Glyph for the toggle control: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => THEME_ICON_DARK,
            Theme::Light => THEME_ICON_LIGHT,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                muted: Color::DarkGray,
                completed: Color::Green,
                error: Color::Red,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
            },
            Theme::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                muted: Color::Gray,
                completed: Color::LightGreen,
                error: Color::LightRed,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
            },
        }
    }
}

/// Colours used by every component for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub completed: Color,
    pub error: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Preferences {
    theme: String,
}

/// File-backed store for the theme preference
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the application data directory
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::get_data_dir()?.join("preferences.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored theme. A missing or unreadable file means light.
    pub fn load(&self) -> Theme {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return Theme::default();
        };

        match toml::from_str::<Preferences>(&content) {
            Ok(prefs) => Theme::from_stored(&prefs.theme),
            Err(e) => {
                log::warn!("Ignoring unreadable preferences file {}: {}", self.path.display(), e);
                Theme::default()
            }
        }
    }

    /// Persist the theme
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preferences directory: {}", parent.display()))?;
        }

        let prefs = Preferences {
            theme: theme.as_str().to_string(),
        };
        let content = toml::to_string(&prefs).context("Failed to serialize preferences")?;

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences file: {}", self.path.display()))
    }
}
