//! Supported site languages.

use serde::{Deserialize, Serialize};

/// A site language. French is the default; Arabic renders right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    Ar,
}

impl Locale {
    /// ISO 639-1 code, used for the `lang` attribute and the switch route.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        match self {
            Self::Fr => "ltr",
            Self::Ar => "rtl",
        }
    }

    /// Parse a language code, ignoring case and region (`ar-MA` → `Ar`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Pick the localized variant of a text, falling back to French when the
    /// Arabic translation is missing or blank.
    #[must_use]
    pub fn pick<'a>(&self, fr: &'a str, ar: Option<&'a str>) -> &'a str {
        match (self, ar) {
            (Self::Ar, Some(text)) if !text.trim().is_empty() => text,
            _ => fr,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
