use serde::{Deserialize, Serialize};

use super::Language;

/// Pick the displayed string from an Arabic/English pair.
///
/// The preferred side wins when it has visible text, then the other side,
/// then the empty string. Whitespace-only values count as empty.
pub fn resolve(primary: Option<&str>, secondary: Option<&str>, prefer_arabic: bool) -> String {
    let (first, second) = if prefer_arabic {
        (primary, secondary)
    } else {
        (secondary, primary)
    };

    first
        .filter(|s| !is_blank(s))
        .or_else(|| second.filter(|s| !is_blank(s)))
        .unwrap_or_default()
        .to_string()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A CMS text field carried in both locales.
///
/// Queries project `field`/`fieldEn` pairs into `{ "ar": ..., "en": ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub ar: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

impl LocalizedText {
    pub fn new(ar: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            ar: Some(ar.into()),
            en: Some(en.into()),
        }
    }

    pub fn arabic(ar: impl Into<String>) -> Self {
        Self {
            ar: Some(ar.into()),
            en: None,
        }
    }

    pub fn english(en: impl Into<String>) -> Self {
        Self {
            ar: None,
            en: Some(en.into()),
        }
    }

    pub fn resolve(&self, language: Language) -> String {
        resolve(
            self.ar.as_deref(),
            self.en.as_deref(),
            language == Language::Ar,
        )
    }

    /// Resolve, substituting `fallback` when neither locale has text.
    pub fn resolve_or(&self, language: Language, fallback: &str) -> String {
        let text = self.resolve(language);
        if text.is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }

    /// True when neither locale carries visible text.
    pub fn is_empty(&self) -> bool {
        self.ar.as_deref().is_none_or(is_blank) && self.en.as_deref().is_none_or(is_blank)
    }
}
