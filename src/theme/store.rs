//! Persisted theme preference.

use super::{EffectiveTheme, ThemePreference};
use crate::storage::KeyValueStorage;

/// Reads and writes the user's theme override under a single storage key.
///
/// Never fails: storage errors read as `System` and failed writes are logged.
#[derive(Debug)]
pub struct ThemePreferenceStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ThemePreferenceStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn get(&self) -> ThemePreference {
        match self.storage.read(&self.key) {
            Ok(raw) => ThemePreference::from_stored(raw.as_deref()),
            Err(e) => {
                log::debug!("theme preference read failed, using system: {e}");
                ThemePreference::System
            }
        }
    }

    pub fn set_explicit(&self, theme: EffectiveTheme) {
        if let Err(e) = self.storage.write(&self.key, theme.as_stored()) {
            log::warn!("failed to persist theme preference {}: {e}", theme.as_stored());
        }
    }

    pub fn clear_to_system(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::warn!("failed to clear theme preference: {e}");
        }
    }

    pub fn set(&self, preference: ThemePreference) {
        match preference.explicit() {
            Some(theme) => self.set_explicit(theme),
            None => self.clear_to_system(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
