use crate::helpers::{app, get, send, send_text, stub_config};
use ai_gateway::config::Config;
use axum::http::StatusCode;
use insta::assert_snapshot;
use rstest::rstest;

#[rstest]
#[case(stub_config("openai"))]
#[case(Config { dev_mode: true, ..stub_config("anthropic") })]
#[case(Config { port: 8080, provider: "gemini".to_string(), gemini_api_key: Some("k".to_string()), ..Config::default() })]
#[tokio::test]
async fn health_is_ok_regardless_of_configuration(#[case] config: Config) {
    let (status, body) = send(app(config), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "health message should be a non-empty string: {body}"
    );
}

#[tokio::test]
async fn status_reflects_startup_environment() {
    let config = Config::from_lookup(|key| match key {
        "AI_PROVIDER" => Some("test-provider".to_string()),
        _ => None,
    })
    .expect("Stub configuration needs no secrets");

    let (status, body) = send_text(app(config), get("/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_snapshot!(body, @r#"{"status":"ACTIVE","provider":"test-provider","dev_mode":false}"#);
}

#[tokio::test]
async fn status_reports_dev_mode() {
    let config = Config::from_lookup(|key| (key == "DEV_MODE").then(|| "true".to_string()))
        .expect("Stub configuration needs no secrets");

    let (_, body) = send(app(config), get("/status")).await;

    assert_eq!(body["provider"], "openai");
    assert_eq!(body["dev_mode"], true);
}

#[tokio::test]
async fn version_is_crate_version() {
    let (status, body) = send(app(stub_config("openai")), get("/version")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let (status, body) = send_text(app(stub_config("openai")), get("/v2/models")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_snapshot!(body, @r#"{"error":"Not found: GET /v2/models"}"#);
}
