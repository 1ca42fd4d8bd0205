pub mod middleware;
pub mod routes;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

#[must_use]
pub fn build_router(state: AppState) -> Router {
    let chat_completions = post(routes::chat_completions)
        .layer(from_fn_with_state(state.clone(), middleware::select_provider));

    Router::new()
        .route("/v1/chat/completions", chat_completions)
        .route("/api/ai/writing/suggest", post(routes::suggest_writing))
        .route("/api/ai/report/generate", post(routes::generate_report))
        .route("/health", get(routes::health))
        .route("/status", get(routes::status))
        .route("/version", get(routes::version))
        .fallback(routes::not_found)
        .layer(from_fn_with_state(state.clone(), middleware::dev_request_log))
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}
