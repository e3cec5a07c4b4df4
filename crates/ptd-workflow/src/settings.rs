//! Display preferences: theme mode and accent color.
//!
//! [`Settings`] is loaded once from a [`SettingsStore`] at startup,
//! handed to the rendering layer as a plain value, and changed only
//! through [`Settings::update`], which persists the affected key.
//! Browser code supplies a `localStorage`-backed store; tests and
//! non-browser callers use [`MemoryStore`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage key for the theme mode preference.
pub const THEME_MODE_KEY: &str = "themeMode";

/// Storage key for the accent preference.
pub const ACCENT_KEY: &str = "accent";

/// Errors from reading or writing preferences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The backing store rejected a write or is unavailable.
    #[error("settings storage error: {0}")]
    Storage(String),

    /// A stored value is not a recognized option.
    #[error("unrecognized {kind} value: {value:?}")]
    Unrecognized {
        /// Which preference was being parsed.
        kind: &'static str,
        /// The raw stored value.
        value: String,
    },
}

/// The user's display mode choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the operating system's color-scheme preference.
    #[default]
    Auto,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemeMode {
    /// All modes in segmented-control order.
    pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

    /// Stored / attribute form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Capitalized label for buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Pick the concrete theme, consulting the system only in Auto mode.
    #[must_use]
    pub const fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Self::Auto if system_prefers_dark => ResolvedTheme::Dark,
            Self::Auto | Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SettingsError::Unrecognized {
                kind: "theme mode",
                value: s.to_owned(),
            })
    }
}

/// The concrete theme applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl ResolvedTheme {
    /// Attribute form (`data-theme`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Accent color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Violet (default).
    #[default]
    Violet,
    /// Blue.
    Blue,
    /// Emerald green.
    Emerald,
    /// Rose.
    Rose,
    /// Amber.
    Amber,
}

impl Accent {
    /// Every accent, in swatch order.
    pub const ALL: [Self; 5] = [
        Self::Violet,
        Self::Blue,
        Self::Emerald,
        Self::Rose,
        Self::Amber,
    ];

    /// Stored / attribute form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Violet => "violet",
            Self::Blue => "blue",
            Self::Emerald => "emerald",
            Self::Rose => "rose",
            Self::Amber => "amber",
        }
    }

    /// Capitalized label for tooltips and screen readers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Violet => "Violet",
            Self::Blue => "Blue",
            Self::Emerald => "Emerald",
            Self::Rose => "Rose",
            Self::Amber => "Amber",
        }
    }

    /// Swatch color as a CSS hex string.
    #[must_use]
    pub const fn swatch(self) -> &'static str {
        match self {
            Self::Violet => "#8b5cf6",
            Self::Blue => "#3b82f6",
            Self::Emerald => "#10b981",
            Self::Rose => "#f43f5e",
            Self::Amber => "#f59e0b",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Accent {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|accent| accent.as_str() == s)
            .ok_or_else(|| SettingsError::Unrecognized {
                kind: "accent",
                value: s.to_owned(),
            })
    }
}

/// A single preference change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    /// Switch display mode.
    Mode(ThemeMode),
    /// Switch accent color.
    Accent(Accent),
}

/// Key-value persistence for preferences.
pub trait SettingsStore {
    /// Read the raw value for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Storage`] if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The user's display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display mode.
    pub mode: ThemeMode,
    /// Accent color.
    pub accent: Accent,
}

impl Settings {
    /// Read both preferences, falling back to defaults for absent or
    /// unrecognized values.
    #[must_use]
    pub fn load(store: &impl SettingsStore) -> Self {
        Self {
            mode: read_or_default(store, THEME_MODE_KEY),
            accent: read_or_default(store, ACCENT_KEY),
        }
    }

    /// Apply `change` and persist the key it touches.
    ///
    /// The in-memory value is updated even if the write fails, so the
    /// page still reflects the user's choice for this session.
    ///
    /// # Errors
    ///
    /// Returns the store's [`SettingsError`] if persisting fails.
    pub fn update(
        &mut self,
        change: SettingChange,
        store: &mut impl SettingsStore,
    ) -> Result<(), SettingsError> {
        match change {
            SettingChange::Mode(mode) => {
                self.mode = mode;
                store.set(THEME_MODE_KEY, mode.as_str())
            }
            SettingChange::Accent(accent) => {
                self.accent = accent;
                store.set(ACCENT_KEY, accent.as_str())
            }
        }
    }

    /// Concrete theme for the current mode.
    #[must_use]
    pub const fn resolved_theme(&self, system_prefers_dark: bool) -> ResolvedTheme {
        self.mode.resolve(system_prefers_dark)
    }

    /// The `data-*` attributes the page root carries for these settings.
    #[must_use]
    pub const fn document_attributes(
        &self,
        system_prefers_dark: bool,
    ) -> [(&'static str, &'static str); 3] {
        [
            ("data-mode", self.mode.as_str()),
            ("data-theme", self.resolved_theme(system_prefers_dark).as_str()),
            ("data-accent", self.accent.as_str()),
        ]
    }
}

fn read_or_default<T>(store: &impl SettingsStore, key: &str) -> T
where
    T: FromStr<Err = SettingsError> + Default,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|e: SettingsError| {
        tracing::warn!(key, error = %e, "ignoring stored preference");
        T::default()
    })
}
