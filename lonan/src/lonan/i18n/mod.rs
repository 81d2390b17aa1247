pub mod dictionary;
pub mod state;
pub mod text;

use std::fmt;
use std::str::FromStr;

use confik::Configuration;
use serde::{Deserialize, Serialize};

pub use dictionary::{labels, lookup};
pub use state::{COOKIE_NAME, CookieStore, LanguageState, MemoryStore, PreferenceStore};
pub use text::{LocalizedText, resolve};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Configuration)]
#[serde(rename_all = "lowercase")]
#[confik(forward(serde(rename_all = "lowercase")))]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    pub const fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    pub const fn is_rtl(self) -> bool {
        matches!(self.direction(), Direction::Rtl)
    }

    /// Open Graph locale tag.
    pub const fn og_locale(self) -> &'static str {
        match self {
            Self::Ar => "ar_SA",
            Self::En => "en_US",
        }
    }

    /// Pick between two inline literals, the way components hard-code short copy.
    pub fn pick<'a>(self, ar: &'a str, en: &'a str) -> &'a str {
        match self {
            Self::Ar => ar,
            Self::En => en,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}
