use std::time::Duration;

use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::gateway::ErrorBody;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Provider(String),
    #[error("Provider did not respond within {}ms", .0.as_millis())]
    ProviderTimeout(Duration),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Request body too large (max {limit} bytes)")]
    PayloadTooLarge { limit: usize },
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Not found: {method} {path}")]
    NotFound { method: Method, path: String },
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ProviderTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Rejected { status, .. } => *status,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Provider(err.to_string())
    }
}

impl AppError {
    /// Malformed or mistyped JSON is a 400; every other extractor rejection
    /// (oversized body, wrong content type) keeps axum's status.
    fn from_rejection(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::InvalidRequest(message)
            }
            status => AppError::Rejected { status, message },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Provider(message) => error!("Provider Error: {message}"),
            AppError::ProviderTimeout(limit) => error!("Provider Timeout after {limit:?}"),
            AppError::InvalidRequest(message) | AppError::Rejected { message, .. } => {
                warn!("Invalid Request: {message}");
            }
            AppError::PayloadTooLarge { limit } => warn!("Request body exceeded {limit} bytes"),
            AppError::NotFound { .. } => {}
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
