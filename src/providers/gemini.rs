use reqwest::Client;
use tracing::{debug, info};

use crate::{
    error::AppError,
    models::gemini::{GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse},
};

#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    #[must_use]
    pub fn new(http_client: Client, base_url: &str, model: &str, api_key: &str) -> Self {
        let endpoint = format!(
            "{}/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        Self {
            http_client,
            endpoint,
            api_key: api_key.to_string(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// # Errors
    ///
    /// Returns [`AppError::Provider`] on transport failure, a non-2xx status or
    /// a response without any text.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        info!("Sending generateContent request to Gemini");
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::user_text(prompt))
            .send()
            .await?;
        let response = validate_upstream_response(response).await?;

        let body: GenerateContentResponse = response.json().await?;
        debug!("Gemini returned {} candidates", body.candidates.len());
        body.first_text()
            .ok_or_else(|| AppError::Provider("Gemini response contained no text".to_string()))
    }
}

async fn validate_upstream_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    Err(AppError::Provider(upstream_error_message(status, &error_text)))
}

fn upstream_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<GeminiErrorResponse>(body) {
        return envelope.error.message;
    }
    if body.trim().is_empty() {
        status.to_string()
    } else {
        body.trim().to_string()
    }
}
