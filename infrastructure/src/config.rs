use domain::generation::Credential;
use domain::language::LanguageSelector;
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub credential: Credential,
    pub model: String,
    pub endpoint: String,
    pub language: LanguageSelector,
}

impl Config {
    /// Load `.env` if present, then the process environment.
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let credential = Credential::from_value(
            lookup("GEMINI_API_KEY")
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup("API_KEY")),
        );
        let language = match lookup("VIBE_SOP_LANG") {
            Some(raw) => raw.parse::<LanguageSelector>().unwrap_or_else(|err: String| {
                tracing::warn!("ignoring VIBE_SOP_LANG: {err}");
                LanguageSelector::default()
            }),
            None => LanguageSelector::default(),
        };

        Self {
            credential,
            model: lookup("GEMINI_MODEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: lookup("GEMINI_ENDPOINT")
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            language,
        }
    }
}
