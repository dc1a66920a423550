//! Display text with optional per-locale translations.
//!
//! Localised text is resolved on demand from `(text, locale)`; domain
//! entities never cache a resolved string.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalizedText {
    /// Default text, used when no translation matches.
    pub text: String,
    /// Translations keyed by locale tag (e.g. `"es"`, `"de"`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub translations: BTreeMap<String, String>,
}

impl LocalizedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translations: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_translation(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(locale.into(), text.into());
        self
    }

    /// Text for `locale`, falling back to the default text.
    pub fn resolve(&self, locale: Option<&str>) -> &str {
        locale
            .and_then(|locale| self.translations.get(locale))
            .map(String::as_str)
            .unwrap_or(&self.text)
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
