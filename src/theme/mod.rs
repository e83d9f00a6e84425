//! Theme preference types and the light/dark derivation rule.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemePreference` is what the user chose (or `System` when they never
//! chose). `EffectiveTheme` is what the page renders, derived on demand from
//! the preference and the OS color-scheme signal. Only the preference is
//! persisted, and only through [`store::ThemePreferenceStore`].

pub mod controller;
pub mod head_script;
pub mod store;

pub use controller::{ThemeController, ThemeSurface};
pub use head_script::{head_script, head_script_tag};
pub use store::ThemePreferenceStore;

const STORED_DARK: &str = "dark";
const STORED_LIGHT: &str = "light";
const STORED_SYSTEM: &str = "system";

/// The user's theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    /// No explicit override: follow the OS color-scheme signal.
    #[default]
    System,
}

/// The theme actually rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl ThemePreference {
    /// Decode a persisted entry. Anything other than the two literals is `System`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(STORED_DARK) => Self::Dark,
            Some(STORED_LIGHT) => Self::Light,
            _ => Self::System,
        }
    }

    /// Parse a choice from markup (`light`, `dark`, `system`).
    pub fn from_choice(raw: &str) -> Option<Self> {
        match raw.trim() {
            STORED_DARK => Some(Self::Dark),
            STORED_LIGHT => Some(Self::Light),
            STORED_SYSTEM => Some(Self::System),
            _ => None,
        }
    }

    /// The explicit theme, if the user made one.
    pub fn explicit(self) -> Option<EffectiveTheme> {
        match self {
            Self::Light => Some(EffectiveTheme::Light),
            Self::Dark => Some(EffectiveTheme::Dark),
            Self::System => None,
        }
    }

    /// Derive the rendered theme given the OS "prefers dark" signal.
    pub fn resolve(self, os_prefers_dark: bool) -> EffectiveTheme {
        self.explicit().unwrap_or_else(|| EffectiveTheme::from_prefers_dark(os_prefers_dark))
    }
}

impl From<EffectiveTheme> for ThemePreference {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::Light,
            EffectiveTheme::Dark => Self::Dark,
        }
    }
}

impl EffectiveTheme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Literal written to storage.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => STORED_LIGHT,
            Self::Dark => STORED_DARK,
        }
    }

    /// Value for the root element's `color-scheme` style. Empty means default.
    pub fn color_scheme_hint(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => STORED_DARK,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
