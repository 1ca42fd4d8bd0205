use crate::helpers::{
    GeminiBehavior, OVERLOADED_MESSAGE, TEST_API_KEY, TEST_MODEL, echoed, gemini_config,
    spawn_mock_gemini,
};
use ai_gateway::{
    error::AppError,
    providers::{Provider, gemini::GeminiClient},
};
use reqwest::Client;
use std::time::Duration;

#[tokio::test]
async fn generate_returns_first_candidate_text() {
    let base_url = spawn_mock_gemini(GeminiBehavior::Echo).await;
    let client = GeminiClient::new(Client::new(), &base_url, TEST_MODEL, TEST_API_KEY);

    let text = client
        .generate("Summarize: rust")
        .await
        .expect("Mock Gemini echoes prompts");

    assert_eq!(text, echoed("Summarize: rust"));
}

#[tokio::test]
async fn wrong_api_key_surfaces_google_message() {
    let base_url = spawn_mock_gemini(GeminiBehavior::Echo).await;
    let client = GeminiClient::new(Client::new(), &base_url, TEST_MODEL, "wrong-key");

    let err = client.generate("hi").await.expect_err("Provider call should fail");

    assert!(matches!(err, AppError::Provider(_)));
    assert_eq!(
        err.to_string(),
        "API key not valid. Please pass a valid API key."
    );
}

#[tokio::test]
async fn upstream_error_status_becomes_provider_error() {
    let base_url = spawn_mock_gemini(GeminiBehavior::Overloaded).await;
    let provider = Provider::from_config(&gemini_config(base_url), Client::new());

    let err = provider.generate("hi").await.expect_err("Provider call should fail");

    assert_eq!(err.to_string(), OVERLOADED_MESSAGE);
}

#[tokio::test]
async fn generate_within_enforces_deadline() {
    let base_url = spawn_mock_gemini(GeminiBehavior::Hang).await;
    let provider = Provider::from_config(&gemini_config(base_url), Client::new());

    let err = provider
        .generate_within("hi", Duration::from_millis(50))
        .await
        .expect_err("Provider call should fail");

    assert!(matches!(err, AppError::ProviderTimeout(limit) if limit == Duration::from_millis(50)));
}
