//! End-to-end tests for the MCP envelope endpoints

use super::common::{spawn_server, spawn_upstream, upstream_prefix};
use mdn_context_server::scraper::ScraperConfig;
use serde_json::{json, Value};

#[tokio::test]
async fn test_mcp_contexts_returns_envelope() {
    let upstream = spawn_upstream().await;
    let addr = spawn_server(ScraperConfig {
        allowed_url_prefix: upstream_prefix(upstream),
        ..ScraperConfig::default()
    })
    .await;

    let url = format!("http://{}/en-US/docs/X", upstream);
    let response = reqwest::Client::new()
        .post(format!("http://{}/mcp/contexts", addr))
        .json(&json!({"parameters": {"url": url}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let contexts = body["contexts"].as_array().unwrap();
    assert_eq!(contexts.len(), 1);

    let context = &contexts[0];
    assert_eq!(context["id"], "mdn-X");
    assert_eq!(context["content"]["format"], "markdown");

    let text = context["content"]["text"].as_str().unwrap();
    assert!(text.starts_with("# X\n\n"));
    assert!(text.contains("Hello World"));
    assert!(!text.contains("evil"));

    assert_eq!(context["metadata"]["type"], "mdn_document");
    assert_eq!(context["metadata"]["url"], url);
    assert_eq!(
        context["metadata"]["source"],
        "Mozilla Developer Network (MDN)"
    );
    assert!(!context["metadata"]["instruction"]
        .as_str()
        .unwrap()
        .is_empty());

    assert_eq!(body["metadata"]["server"], "mdn-web-scraper");
}

#[tokio::test]
async fn test_mcp_root_endpoint_is_an_alias() {
    let upstream = spawn_upstream().await;
    let addr = spawn_server(ScraperConfig {
        allowed_url_prefix: upstream_prefix(upstream),
        ..ScraperConfig::default()
    })
    .await;

    let request = json!({"parameters": {"url": format!("http://{}/en-US/docs/X", upstream)}});
    let client = reqwest::Client::new();

    let via_root = client
        .post(format!("http://{}/mcp", addr))
        .json(&request)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let via_contexts = client
        .post(format!("http://{}/mcp/contexts", addr))
        .json(&request)
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(via_root, via_contexts);
}

#[tokio::test]
async fn test_mcp_missing_url_parameter_is_400() {
    let addr = spawn_server(ScraperConfig::default()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/mcp/contexts", addr))
        .json(&json!({"parameters": {}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error_type"], "validation_error");
    assert_eq!(body["details"]["field"], "url");
}

#[tokio::test]
async fn test_mcp_fetch_failure_maps_to_500() {
    let upstream = spawn_upstream().await;
    let addr = spawn_server(ScraperConfig {
        allowed_url_prefix: upstream_prefix(upstream),
        ..ScraperConfig::default()
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/mcp/contexts", addr))
        .json(&json!({"parameters": {"url": format!("http://{}/en-US/docs/broken", upstream)}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error_type"], "fetch_failed");
}

#[tokio::test]
async fn test_mcp_envelope_is_reproducible() {
    let upstream = spawn_upstream().await;
    let addr = spawn_server(ScraperConfig {
        allowed_url_prefix: upstream_prefix(upstream),
        ..ScraperConfig::default()
    })
    .await;

    let request = json!({"parameters": {"url": format!("http://{}/en-US/docs/X", upstream)}});
    let client = reqwest::Client::new();

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let body = client
            .post(format!("http://{}/mcp/contexts", addr))
            .json(&request)
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
}
