use std::{env, time::Duration};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROVIDER: &str = "openai";
pub const GEMINI_PROVIDER: &str = "gemini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is required when AI_PROVIDER=gemini")]
    MissingGeminiApiKey,
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub provider: String,
    pub dev_mode: bool,
    pub log_enabled: bool,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub provider_timeout: Duration,
    pub connect_timeout: Duration,
    pub idle_connection_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            provider: DEFAULT_PROVIDER.to_string(),
            dev_mode: false,
            log_enabled: false,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            provider_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            idle_connection_timeout: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Fails when a numeric variable does not parse or the Gemini provider is
    /// selected without an API key.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            host: non_empty("AI_HOST").unwrap_or(defaults.host),
            port: parse_number(&lookup, "AI_PORT")?.unwrap_or(defaults.port),
            provider: non_empty("AI_PROVIDER").unwrap_or(defaults.provider),
            dev_mode: is_true(lookup("DEV_MODE").as_deref()),
            log_enabled: is_true(lookup("AI_LOG_ENABLED").as_deref()),
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            provider_timeout: parse_number(&lookup, "AI_PROVIDER_TIMEOUT_SECS")?
                .map_or(defaults.provider_timeout, Duration::from_secs),
            connect_timeout: parse_number(&lookup, "CONNECTION_TIMEOUT")?
                .map_or(defaults.connect_timeout, Duration::from_secs),
            idle_connection_timeout: parse_number(&lookup, "IDLE_CONNECTION_TIMEOUT")?
                .map_or(defaults.idle_connection_timeout, Duration::from_secs),
        };

        if config.uses_gemini() && config.gemini_api_key.is_none() {
            return Err(ConfigError::MissingGeminiApiKey);
        }

        Ok(config)
    }

    #[must_use]
    pub fn uses_gemini(&self) -> bool {
        self.provider.eq_ignore_ascii_case(GEMINI_PROVIDER)
    }

    /// The Gemini provider additionally needs `AI_LOG_ENABLED`; the stub only
    /// needs `DEV_MODE`.
    #[must_use]
    pub fn request_logging_enabled(&self) -> bool {
        self.dev_mode && (self.log_enabled || !self.uses_gemini())
    }

    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_true(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == "true")
}

fn parse_number<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
