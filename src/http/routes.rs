use axum::{
    Extension, Json,
    body::Bytes,
    extract::{
        State,
        rejection::{BytesRejection, JsonRejection},
    },
    http::{HeaderMap, Method, Uri, header},
};
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::AppError,
    http::middleware::ActiveProvider,
    models::{
        gateway::{
            HealthResponse, ReportRequest, ReportResponse, StatusResponse, SuggestRequest,
            SuggestResponse, VersionResponse,
        },
        openai::ChatCompletionResponse,
    },
    providers::prompt,
    state::AppState,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Never calls a model; reports which provider the process was started with.
pub async fn chat_completions(
    Extension(ActiveProvider(provider)): Extension<ActiveProvider>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatCompletionResponse>, AppError> {
    let body = body?;
    if let Some(payload) = optional_json_body(&headers, &body)? {
        let keys = payload.as_object().map_or(0, serde_json::Map::len);
        debug!("Ignoring chat payload with {keys} top-level keys");
    }

    info!("Using AI Provider: {provider}");
    Ok(Json(ChatCompletionResponse::single(format!(
        "Response from {provider}: Integrated successfully!"
    ))))
}

pub async fn suggest_writing(
    State(state): State<AppState>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, AppError> {
    let Json(request) = payload?;
    let text = require_text("prompt", &request.prompt)?;

    let content = state
        .provider
        .generate_within(
            &prompt::writing_suggestion(text),
            state.config.provider_timeout,
        )
        .await?;
    debug!("Writing suggestion generated ({} chars)", content.len());
    Ok(Json(SuggestResponse { content }))
}

pub async fn generate_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<ReportResponse>, AppError> {
    let Json(request) = payload?;
    let context = require_text("context", &request.context)?;

    let report = state
        .provider
        .generate_within(&prompt::report(context), state.config.provider_timeout)
        .await?;
    debug!("Report generated ({} chars)", report.len());
    Ok(Json(ReportResponse { report }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "AI Service is running".to_string(),
    })
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ACTIVE".to_string(),
        provider: state.provider.name().to_string(),
        dev_mode: state.config.dev_mode,
    })
}

pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: VERSION.to_string(),
    })
}

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}

/// A JSON-typed body must parse; an empty body or one sent with another
/// content type is treated as absent.
fn optional_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Option<Value>, AppError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("json"));
    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body).map(Some).map_err(|err| {
        AppError::InvalidRequest(format!("Failed to parse the request body as JSON: {err}"))
    })
}

fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        Err(AppError::InvalidRequest(format!(
            "`{field}` must be a non-empty string"
        )))
    } else {
        Ok(value)
    }
}
