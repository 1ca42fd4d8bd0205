pub mod gemini;
pub mod prompt;

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{config::Config, error::AppError};

use self::gemini::GeminiClient;

/// The one backend a process talks to, chosen at startup.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Answers locally without any network I/O.
    Stub { name: String },
    Gemini(GeminiClient),
}

impl Provider {
    #[must_use]
    pub fn from_config(config: &Config, http_client: Client) -> Self {
        match config.gemini_api_key.as_ref() {
            Some(api_key) if config.uses_gemini() => Provider::Gemini(GeminiClient::new(
                http_client,
                &config.gemini_base_url,
                &config.gemini_model,
                api_key,
            )),
            _ => Provider::Stub {
                name: config.provider.clone(),
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Provider::Stub { name } => name,
            Provider::Gemini(_) => crate::config::GEMINI_PROVIDER,
        }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Provider`] carrying the provider's own message when
    /// the call fails.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        match self {
            Provider::Stub { name } => Ok(format!("Response from {name}: {prompt}")),
            Provider::Gemini(client) => client.generate(prompt).await,
        }
    }

    /// [`Provider::generate`] bounded by `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProviderTimeout`] once `limit` elapses, otherwise
    /// whatever [`Provider::generate`] returns.
    pub async fn generate_within(&self, prompt: &str, limit: Duration) -> Result<String, AppError> {
        debug!("Calling provider {} with {} prompt chars", self.name(), prompt.len());
        tokio::time::timeout(limit, self.generate(prompt))
            .await
            .map_err(|_| AppError::ProviderTimeout(limit))?
    }
}
