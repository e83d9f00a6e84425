use super::*;

// =============================================================
// Derivation
// =============================================================

#[test]
fn explicit_preference_ignores_os_signal() {
    for os_dark in [false, true] {
        assert_eq!(ThemePreference::Light.resolve(os_dark), EffectiveTheme::Light);
        assert_eq!(ThemePreference::Dark.resolve(os_dark), EffectiveTheme::Dark);
    }
}

#[test]
fn system_preference_follows_os_signal() {
    assert_eq!(ThemePreference::System.resolve(true), EffectiveTheme::Dark);
    assert_eq!(ThemePreference::System.resolve(false), EffectiveTheme::Light);
}

#[test]
fn default_preference_is_system() {
    assert_eq!(ThemePreference::default(), ThemePreference::System);
}

// =============================================================
// Storage boundary
// =============================================================

#[test]
fn from_stored_accepts_only_exact_literals() {
    assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
    assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::System);
    assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::System);
    assert_eq!(ThemePreference::from_stored(Some("DARK")), ThemePreference::System);
    assert_eq!(ThemePreference::from_stored(Some("system")), ThemePreference::System);
    assert_eq!(ThemePreference::from_stored(Some("{\"x\":1}")), ThemePreference::System);
}

#[test]
fn from_choice_parses_markup_values() {
    assert_eq!(ThemePreference::from_choice("light"), Some(ThemePreference::Light));
    assert_eq!(ThemePreference::from_choice(" dark "), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::from_choice("system"), Some(ThemePreference::System));
    assert_eq!(ThemePreference::from_choice("auto"), None);
}

#[test]
fn stored_literal_round_trips_through_decode() {
    for theme in [EffectiveTheme::Light, EffectiveTheme::Dark] {
        let decoded = ThemePreference::from_stored(Some(theme.as_stored()));
        assert_eq!(decoded.explicit(), Some(theme));
    }
}

// =============================================================
// EffectiveTheme helpers
// =============================================================

#[test]
fn inverse_flips_theme() {
    assert_eq!(EffectiveTheme::Light.inverse(), EffectiveTheme::Dark);
    assert_eq!(EffectiveTheme::Dark.inverse(), EffectiveTheme::Light);
}

#[test]
fn color_scheme_hint_is_empty_for_light() {
    assert_eq!(EffectiveTheme::Dark.color_scheme_hint(), "dark");
    assert_eq!(EffectiveTheme::Light.color_scheme_hint(), "");
}
