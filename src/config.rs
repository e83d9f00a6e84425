//! Site behavior configuration.
//!
//! Every name the browser layer touches (storage keys, element ids, class
//! names, the media query) lives here with a default matching the site
//! templates. Pages may override any subset through a JSON blob in the
//! `data-site-config` attribute of `<html>`.

use serde::Deserialize;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_LANGUAGE_STORAGE_KEY: &str = "selectedLanguage";
pub const DEFAULT_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_COPY_RESET_MS: u32 = 3000;

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub language: LanguageConfig,
    pub clipboard: ClipboardConfig,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            menu: MenuConfig::default(),
            language: LanguageConfig::default(),
            clipboard: ClipboardConfig::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.log_level()?;
        Ok(config)
    }

    /// Typed log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    /// Class present on `<html>` iff the effective theme is dark.
    pub dark_class: String,
    pub color_scheme_query: String,
    pub toggle_id: String,
    /// Attribute carrying `light`, `dark` or `system` on explicit choice buttons.
    pub choice_attribute: String,
    pub sun_icon_selector: String,
    pub moon_icon_selector: String,
    pub hidden_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            dark_class: "dark".to_owned(),
            color_scheme_query: DEFAULT_COLOR_SCHEME_QUERY.to_owned(),
            toggle_id: "theme-switcher".to_owned(),
            choice_attribute: "data-theme-choice".to_owned(),
            sun_icon_selector: ".sun-icon".to_owned(),
            moon_icon_selector: ".moon-icon".to_owned(),
            hidden_class: "hidden".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub open_button_id: String,
    pub close_button_id: String,
    pub panel_id: String,
    pub open_class: String,
    pub closed_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open_button_id: "openMenu".to_owned(),
            close_button_id: "closeMenu".to_owned(),
            panel_id: "hiddenMenu".to_owned(),
            open_class: "translate-x-0".to_owned(),
            closed_class: "translate-x-full".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub storage_key: String,
    /// Language served from `/` instead of `/{lang}/`. Empty disables.
    pub root_language: String,
    pub button_id: String,
    pub list_id: String,
    pub item_selector: String,
    pub lang_attribute: String,
    pub hidden_class: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_LANGUAGE_STORAGE_KEY.to_owned(),
            root_language: "en".to_owned(),
            button_id: "languageButton".to_owned(),
            list_id: "languageList".to_owned(),
            item_selector: "[role=\"menuitem\"]".to_owned(),
            lang_attribute: "data-lang".to_owned(),
            hidden_class: "hidden".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy button wired even without any copy attribute.
    pub button_id: String,
    /// Buttons carrying this attribute copy its value when non-empty.
    pub copy_attribute: String,
    /// Fallback: id of the element whose text content is copied.
    pub target_attribute: String,
    /// Last resort: the `href` of this element, the page's canonical URL.
    pub canonical_selector: String,
    pub copied_label: String,
    pub failed_label: String,
    pub reset_ms: u32,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            button_id: "copyButton".to_owned(),
            copy_attribute: "data-copy".to_owned(),
            target_attribute: "data-copy-target".to_owned(),
            canonical_selector: "link[rel=\"canonical\"]".to_owned(),
            copied_label: "Copied!".to_owned(),
            failed_label: "Copy failed".to_owned(),
            reset_ms: DEFAULT_COPY_RESET_MS,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
