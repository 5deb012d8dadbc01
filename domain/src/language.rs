use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output and display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageSelector {
    #[default]
    En,
    Zh,
}

impl LanguageSelector {
    pub fn code(self) -> &'static str {
        match self {
            LanguageSelector::En => "en",
            LanguageSelector::Zh => "zh",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            LanguageSelector::En => LanguageSelector::Zh,
            LanguageSelector::Zh => LanguageSelector::En,
        }
    }
}

impl fmt::Display for LanguageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" | "en-us" | "en-gb" => Ok(LanguageSelector::En),
            "zh" | "chinese" | "zh-cn" | "zh-hans" | "cn" => Ok(LanguageSelector::Zh),
            other => Err(format!("unsupported language '{other}' (expected 'en' or 'zh')")),
        }
    }
}

/// A piece of static text in both display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub zh: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, zh: &'static str) -> Self {
        Self { en, zh }
    }

    pub fn get(&self, language: LanguageSelector) -> &'static str {
        match language {
            LanguageSelector::En => self.en,
            LanguageSelector::Zh => self.zh,
        }
    }
}
