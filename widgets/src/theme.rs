//! Persisted light/dark theme preference.
//!
//! The stored flag is read once when the preference loads. Every toggle flips
//! the body class state first and derives the theme from that state, so the
//! stored value always follows what the page shows.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::store::PreferenceStore;

/// Class applied to `<body>` in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only an exact `"dark"` selects dark mode.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Sun,
            Self::Dark => ThemeIcon::Moon,
        }
    }
}

/// Icon shown on the theme toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

impl ThemeIcon {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Sun => "fa-sun",
            Self::Moon => "fa-moon",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
    dark_class: bool,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Read the persisted flag under `key` and apply it.
    pub fn load(store: S, key: &str) -> Self {
        let theme = Theme::from_stored(store.get(key).as_deref());
        log::debug!("theme preference loaded: {}", theme.as_str());
        Self { store, key: key.to_owned(), dark_class: theme == Theme::Dark }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        if self.dark_class { Theme::Dark } else { Theme::Light }
    }

    #[must_use]
    pub fn icon(&self) -> ThemeIcon {
        self.theme().icon()
    }

    /// Whether [`DARK_MODE_CLASS`] should be on `<body>`.
    #[must_use]
    pub fn body_class_active(&self) -> bool {
        self.dark_class
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Flip the class state and persist the resulting theme.
    ///
    /// A failed write is logged; the in-page state still changes.
    pub fn toggle(&mut self) -> Theme {
        self.dark_class = !self.dark_class;
        let theme = self.theme();
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
        theme
    }
}
