use super::*;

#[test]
fn defaults_match_site_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.theme.dark_class, "dark");
    assert_eq!(cfg.theme.color_scheme_query, "(prefers-color-scheme: dark)");
    assert_eq!(cfg.theme.toggle_id, "theme-switcher");
    assert_eq!(cfg.menu.panel_id, "hiddenMenu");
    assert_eq!(cfg.language.storage_key, "selectedLanguage");
    assert_eq!(cfg.clipboard.reset_ms, DEFAULT_COPY_RESET_MS);
    assert_eq!(cfg.log_level().unwrap(), log::Level::Info);
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn from_json_partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{"theme":{"storage_key":"site-theme"},"log_level":"debug"}"#).unwrap();
    assert_eq!(cfg.theme.storage_key, "site-theme");
    assert_eq!(cfg.theme.dark_class, "dark");
    assert_eq!(cfg.menu, MenuConfig::default());
    assert_eq!(cfg.log_level().unwrap(), log::Level::Debug);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = SiteConfig::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "loud"));
}

#[test]
fn clipboard_defaults_wire_canonical_copy_button() {
    let cfg = ClipboardConfig::default();
    assert_eq!(cfg.button_id, "copyButton");
    assert_eq!(cfg.canonical_selector, "link[rel=\"canonical\"]");
    assert_eq!(cfg.reset_ms, 3000);
}

#[test]
fn language_defaults_serve_english_from_root() {
    assert_eq!(LanguageConfig::default().root_language, "en");
}
