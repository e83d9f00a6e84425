use super::*;
use crate::storage::{MemoryStorage, StorageError};
use std::rc::Rc;

struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[test]
fn get_without_entry_is_system() {
    let store = ThemePreferenceStore::new(MemoryStorage::new(), "theme");
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn set_explicit_dark_then_get_returns_dark() {
    let store = ThemePreferenceStore::new(MemoryStorage::new(), "theme");
    store.set_explicit(EffectiveTheme::Dark);
    assert_eq!(store.get(), ThemePreference::Dark);
}

#[test]
fn set_explicit_overrides_previous_entry() {
    let store = ThemePreferenceStore::new(MemoryStorage::new().with_entry("theme", "dark"), "theme");
    store.set_explicit(EffectiveTheme::Light);
    assert_eq!(store.get(), ThemePreference::Light);
}

#[test]
fn clear_to_system_removes_entry() {
    let storage = Rc::new(MemoryStorage::new().with_entry("theme", "light"));
    let store = ThemePreferenceStore::new(Rc::clone(&storage), "theme");
    store.clear_to_system();
    assert_eq!(store.get(), ThemePreference::System);
    assert!(storage.is_empty());
}

#[test]
fn set_dispatches_on_preference() {
    let store = ThemePreferenceStore::new(MemoryStorage::new(), "theme");
    store.set(ThemePreference::Dark);
    assert_eq!(store.get(), ThemePreference::Dark);
    store.set(ThemePreference::System);
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn malformed_entry_reads_as_system() {
    let store = ThemePreferenceStore::new(MemoryStorage::new().with_entry("theme", "sepia"), "theme");
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn broken_storage_degrades_without_panicking() {
    let store = ThemePreferenceStore::new(BrokenStorage, "theme");
    store.set_explicit(EffectiveTheme::Dark);
    store.clear_to_system();
    assert_eq!(store.get(), ThemePreference::System);
}

#[test]
fn writes_are_visible_to_other_stores_on_same_storage() {
    let storage = Rc::new(MemoryStorage::new());
    let tab_a = ThemePreferenceStore::new(Rc::clone(&storage), "theme");
    let tab_b = ThemePreferenceStore::new(Rc::clone(&storage), "theme");
    tab_a.set_explicit(EffectiveTheme::Dark);
    assert_eq!(tab_b.get(), ThemePreference::Dark);
}

#[test]
fn store_uses_configured_key() {
    let storage = Rc::new(MemoryStorage::new());
    let store = ThemePreferenceStore::new(Rc::clone(&storage), "site-theme");
    store.set_explicit(EffectiveTheme::Light);
    assert_eq!(store.key(), "site-theme");
    assert_eq!(storage.read("site-theme").unwrap().as_deref(), Some("light"));
    assert_eq!(storage.read("theme").unwrap(), None);
}
