//! Two-valued theme preference.
//!
//! DESIGN
//! ======
//! `ThemePreference` owns the current value and its store, so toggling and
//! persisting happen in one place. DOM application lives in
//! `components::theme_toggle`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// Page color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "🌙",
            Self::Light => "☀️",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Sombre",
            Self::Light => "Clair",
        }
    }
}

/// Current theme backed by a key-value store.
#[derive(Debug)]
pub struct ThemePreference<S> {
    current: Theme,
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Read the stored theme; unknown or missing values fall back to dark.
    pub fn load(store: S) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { current, store }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(THEME_KEY, self.current.as_str());
        self.current
    }
}
