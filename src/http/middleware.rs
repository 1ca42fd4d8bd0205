use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::{error::AppError, state::AppState};

pub const DEV_LOG_TARGET: &str = "ai_gateway::dev";
pub const BODY_PREVIEW_CHARS: usize = 100;
/// Same ceiling axum's `DefaultBodyLimit` applies to the JSON extractors.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Identifier of the configured provider, attached to the request by
/// [`select_provider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveProvider(pub String);

pub async fn select_provider(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    req.extensions_mut()
        .insert(ActiveProvider(state.provider.name().to_string()));
    next.run(req).await
}

/// Emits one diagnostic event per request while request logging is enabled.
/// The body is buffered (up to [`MAX_BODY_BYTES`]) for the preview and handed
/// on unchanged; a larger body is refused with 413.
pub async fn dev_request_log(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if !state.config.request_logging_enabled() {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();
    let (bytes, preview) = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => {
            let preview = body_preview(&bytes);
            (Some(bytes), preview)
        }
        Err(_) => (None, format!("<over {MAX_BODY_BYTES} bytes>")),
    };

    info!(
        target: DEV_LOG_TARGET,
        method = %parts.method,
        path = parts.uri.path(),
        body = %preview,
        "[AI DEV LOG]"
    );

    match bytes {
        Some(bytes) => next.run(Request::from_parts(parts, Body::from(bytes))).await,
        None => AppError::PayloadTooLarge {
            limit: MAX_BODY_BYTES,
        }
        .into_response(),
    }
}

#[must_use]
pub fn body_preview(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect()
}
