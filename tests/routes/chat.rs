use crate::helpers::{app, post_json, post_raw, send, stub_config};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use insta::assert_snapshot;
use serde_json::json;

#[tokio::test]
async fn chat_completions_names_the_configured_provider() {
    let request = post_json(
        "/v1/chat/completions",
        &json!({ "model": "gpt-4o", "messages": [{ "role": "user", "content": "hi" }] }),
    );

    let (status, body) = send(app(stub_config("test-provider")), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_snapshot!(body.to_string(), @r#"{"choices":[{"message":{"content":"Response from test-provider: Integrated successfully!"}}]}"#);
}

#[tokio::test]
async fn chat_completions_ignores_request_contents() {
    let with_model = post_json("/v1/chat/completions", &json!({ "provider": "claude" }));
    let empty = post_raw("/v1/chat/completions", "");

    let (_, first) = send(app(stub_config("openai")), with_model).await;
    let (status, second) = send(app(stub_config("openai")), empty).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(
        first["choices"][0]["message"]["content"],
        "Response from openai: Integrated successfully!"
    );
}

#[tokio::test]
async fn chat_completions_rejects_malformed_json() {
    let (status, body) = send(
        app(stub_config("openai")),
        post_raw("/v1/chat/completions", "{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|m| m.starts_with("Failed to parse the request body as JSON")),
        "{body}"
    );
}

#[tokio::test]
async fn chat_completions_ignores_non_json_content_types() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/chat/completions")
        .header("content-type", "text/plain")
        .body(Body::from("{not json"))
        .expect("Building a static request should not fail");

    let (status, body) = send(app(stub_config("openai")), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["choices"][0]["message"]["content"],
        "Response from openai: Integrated successfully!"
    );
}
