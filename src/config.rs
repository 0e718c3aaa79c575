//! Cold-start configuration.
//!
//! Read once from the environment when a function instance starts and
//! passed into the handlers by value. Nothing here is mutated afterwards.

use crate::error::ConfigError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_FC2_SEARCH_URL: &str = "https://live.fc2.com/api/search.fc2";

/// Which flavour of the search handler is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Fixed placeholder items, no outbound calls.
    Demo,
    /// Items generated by Gemini.
    #[default]
    Live,
}

impl std::str::FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" | "offline" => Ok(SearchMode::Demo),
            "live" => Ok(SearchMode::Live),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Demo => write!(f, "demo"),
            SearchMode::Live => write!(f, "live"),
        }
    }
}

/// Gemini connection settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; `None` when unset or empty.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

/// FC2 live-channel search settings.
#[derive(Debug, Clone)]
pub struct Fc2Config {
    pub dev_id: Option<String>,
    pub dev_secret: Option<String>,
    pub search_url: String,
}

impl Fc2Config {
    /// Both halves of the credential, if configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.dev_id, &self.dev_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

/// Everything a function instance needs at cold start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: SearchMode,
    pub gemini: GeminiConfig,
    pub fc2: Fc2Config,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match get("SEARCH_MODE") {
            Some(raw) => raw.parse()?,
            None => SearchMode::default(),
        };

        Ok(AppConfig {
            mode,
            gemini: GeminiConfig {
                api_key: get("GOOGLE_GEMINI_API_KEY"),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            },
            fc2: Fc2Config {
                dev_id: get("FC2_DEV_ID"),
                dev_secret: get("FC2_DEV_SECRET"),
                search_url: DEFAULT_FC2_SEARCH_URL.to_string(),
            },
        })
    }
}
