//! Language selection persistence and redirect targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each language lives under its own path prefix (`/en/`, `/fr/`, ...). The
//! chosen language is remembered in storage so the language button can show
//! it on every page; the first visit adopts the document's `lang`.

use crate::storage::KeyValueStorage;

const MAX_SUBTAG_LEN: usize = 8;

/// Error returned by [`LanguagePreferenceStore::select`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("invalid language code: {0:?}")]
    InvalidCode(String),
}

/// Whether `code` looks like a language tag (`en`, `pt-BR`, `zh-Hant`).
///
/// Codes end up in URLs and attribute selectors, so anything else is refused.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.split('-').all(|subtag| {
            !subtag.is_empty() && subtag.len() <= MAX_SUBTAG_LEN && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

/// Path of the localized home page. `root_language` lives at `/`.
pub fn redirect_path(code: &str, root_language: &str) -> String {
    if !root_language.is_empty() && code.eq_ignore_ascii_case(root_language) {
        return "/".to_owned();
    }
    format!("/{code}/")
}

#[derive(Debug)]
pub struct LanguagePreferenceStore<S> {
    storage: S,
    key: String,
    root_language: String,
}

impl<S: KeyValueStorage> LanguagePreferenceStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into(), root_language: String::new() }
    }

    /// Serve `code` from `/` rather than `/{code}/`.
    #[must_use]
    pub fn with_root_language(mut self, code: impl Into<String>) -> Self {
        self.root_language = code.into();
        self
    }

    /// Stored language, if present and well formed.
    pub fn stored(&self) -> Option<String> {
        match self.storage.read(&self.key) {
            Ok(Some(code)) if is_valid_code(&code) => Some(code),
            Ok(Some(code)) => {
                log::debug!("ignoring malformed stored language {code:?}");
                None
            }
            Ok(None) => None,
            Err(e) => {
                log::debug!("language read failed: {e}");
                None
            }
        }
    }

    /// Language to display: the stored one, else `document_lang`, which is
    /// then remembered.
    pub fn resolve(&self, document_lang: &str) -> String {
        if let Some(code) = self.stored() {
            return code;
        }
        if is_valid_code(document_lang) {
            self.persist(document_lang);
        }
        document_lang.to_owned()
    }

    /// Remember `code` and return the page to navigate to.
    pub fn select(&self, code: &str) -> Result<String, LanguageError> {
        let code = code.trim();
        if !is_valid_code(code) {
            return Err(LanguageError::InvalidCode(code.to_owned()));
        }
        self.persist(code);
        Ok(redirect_path(code, &self.root_language))
    }

    fn persist(&self, code: &str) {
        if let Err(e) = self.storage.write(&self.key, code) {
            log::warn!("failed to persist language {code}: {e}");
        }
    }
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
