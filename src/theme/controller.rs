//! Theme controller: keeps the document in sync with the effective theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at module start; `new` applies the derived theme
//! synchronously with no deferred step. Before the module loads, the inline
//! head script (see [`super::head_script`]) has applied the same derivation.
//! Afterwards the browser layer forwards toggle clicks, explicit choices, OS
//! color-scheme changes and cross-tab storage events here.
//!
//! Only `toggle` and `choose` write the stored preference. The OS and storage
//! reaction paths re-derive the theme from whatever is stored, so an explicit
//! choice survives OS changes until the user picks `System` again.

use super::store::ThemePreferenceStore;
use super::{EffectiveTheme, ThemePreference};
use crate::storage::KeyValueStorage;

/// Document side of the theme: the root element and optional icons.
///
/// Implementations must be set-based so repeating a call is a no-op.
pub trait ThemeSurface {
    /// Add or remove the dark marker class on the root element.
    fn set_dark_marker(&mut self, present: bool);
    /// Set the native form-control rendering hint (`"dark"` or `""`).
    fn set_color_scheme(&mut self, hint: &str);
    /// Show or hide the sun/moon icons. Surfaces without icons ignore this.
    fn set_icons(&mut self, sun_visible: bool, moon_visible: bool) {
        let _ = (sun_visible, moon_visible);
    }
}

pub struct ThemeController<S, D> {
    store: ThemePreferenceStore<S>,
    surface: D,
    os_prefers_dark: bool,
    applied: EffectiveTheme,
}

impl<S: KeyValueStorage, D: ThemeSurface> ThemeController<S, D> {
    /// Derive the theme from storage and the current OS signal and apply it
    /// immediately.
    pub fn new(store: ThemePreferenceStore<S>, surface: D, os_prefers_dark: bool) -> Self {
        let initial = store.get().resolve(os_prefers_dark);
        let mut controller = Self { store, surface, os_prefers_dark, applied: initial };
        controller.apply(initial);
        log::debug!("initial theme {initial:?} (os prefers dark: {os_prefers_dark})");
        controller
    }

    pub fn preference(&self) -> ThemePreference {
        self.store.get()
    }

    /// Current derivation of (stored preference, OS signal).
    pub fn effective(&self) -> EffectiveTheme {
        self.store.get().resolve(self.os_prefers_dark)
    }

    /// Theme most recently written to the surface.
    pub fn applied(&self) -> EffectiveTheme {
        self.applied
    }

    pub fn os_prefers_dark(&self) -> bool {
        self.os_prefers_dark
    }

    /// Flip the effective theme and persist the result as an explicit choice.
    ///
    /// Without a stored preference the flip starts from what is on screen, so
    /// repeated clicks keep alternating even when storage rejects the write.
    pub fn toggle(&mut self) -> EffectiveTheme {
        let current = self.store.get().explicit().unwrap_or(self.applied);
        let next = current.inverse();
        self.store.set_explicit(next);
        self.apply(next);
        log::debug!("theme toggled to {next:?}");
        next
    }

    /// Persist an explicit choice (`System` clears the override) and reapply.
    pub fn choose(&mut self, preference: ThemePreference) -> EffectiveTheme {
        self.store.set(preference);
        let next = preference.resolve(self.os_prefers_dark);
        self.apply(next);
        log::debug!("theme preference set to {preference:?}, rendering {next:?}");
        next
    }

    /// React to a live OS color-scheme change. Never writes storage.
    pub fn on_color_scheme_change(&mut self, prefers_dark: bool) -> EffectiveTheme {
        self.os_prefers_dark = prefers_dark;
        let next = self.effective();
        self.apply(next);
        log::debug!("os color scheme changed (prefers dark: {prefers_dark}), rendering {next:?}");
        next
    }

    /// React to another tab writing the preference key. Never writes storage.
    pub fn on_storage_change(&mut self) -> EffectiveTheme {
        let next = self.effective();
        self.apply(next);
        next
    }

    /// Write `theme` to the surface.
    pub fn apply(&mut self, theme: EffectiveTheme) {
        self.surface.set_dark_marker(theme.is_dark());
        self.surface.set_color_scheme(theme.color_scheme_hint());
        self.surface.set_icons(!theme.is_dark(), theme.is_dark());
        self.applied = theme;
    }

    pub fn store(&self) -> &ThemePreferenceStore<S> {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
