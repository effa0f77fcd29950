use categorize_item::adapters::gateway::{handle_event, GatewayEvent};
use categorize_item::adapters::http::handle;
use categorize_item::{Categorizer, CategorizerConfig};
use httpmock::prelude::*;

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_end_to_end_with_remote_classifier() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200).json_body(serde_json::json!({
            "content": [{"type": "text", "text": "{\"category\": \"Bakery\", \"confidence\": 0.93}"}]
        }));
    });

    let config = CategorizerConfig {
        api_url: server.url("/v1/messages"),
        ..Default::default()
    }
    .with_api_key("sk-test-key");
    let categorizer = Categorizer::from_config(&config).unwrap();

    let response = handle(
        &categorizer,
        "POST",
        Some(r#"{"item_name": "baguette", "list_type": "grocery"}"#),
    )
    .await;

    api_mock.assert();
    assert_eq!(response.status, 200);
    assert_eq!(
        json(&response.body),
        serde_json::json!({"category": "Bakery", "confidence": 0.93})
    );
}

#[tokio::test]
async fn test_remote_failure_still_returns_200() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(401)
            .json_body(serde_json::json!({"type": "error", "error": {"type": "authentication_error"}}));
    });

    let config = CategorizerConfig {
        api_url: server.url("/v1/messages"),
        ..Default::default()
    }
    .with_api_key("sk-wrong-key");
    let categorizer = Categorizer::from_config(&config).unwrap();

    let response = handle(
        &categorizer,
        "POST",
        Some(r#"{"item_name": "running shoes", "list_type": "shopping"}"#),
    )
    .await;

    api_mock.assert();
    assert_eq!(response.status, 200);
    assert_eq!(
        json(&response.body),
        serde_json::json!({"category": "Shoes", "confidence": 0.3})
    );
}

#[tokio::test]
async fn test_project_and_unknown_list_types() {
    let categorizer = Categorizer::offline();

    let response = handle(
        &categorizer,
        "POST",
        Some(r#"{"item_name": "repaint the garage", "list_type": "project"}"#),
    )
    .await;
    assert_eq!(response.status, 200);
    assert_eq!(
        json(&response.body),
        serde_json::json!({"category": null, "confidence": 0.0})
    );

    // 未知的 list_type 視為 grocery
    let response = handle(
        &categorizer,
        "POST",
        Some(r#"{"item_name": "milk", "list_type": "hardware"}"#),
    )
    .await;
    assert_eq!(
        json(&response.body),
        serde_json::json!({"category": "Refrigerated", "confidence": 0.5})
    );
}

#[tokio::test]
async fn test_non_string_list_type_is_treated_as_grocery() {
    let categorizer = Categorizer::offline();

    for body in [
        r#"{"item_name": "milk", "list_type": 5}"#,
        r#"{"item_name": "milk", "list_type": true}"#,
    ] {
        let response = handle(&categorizer, "POST", Some(body)).await;
        assert_eq!(response.status, 200, "body: {}", body);
        assert_eq!(
            json(&response.body),
            serde_json::json!({"category": "Refrigerated", "confidence": 0.5})
        );
    }
}

#[tokio::test]
async fn test_validation_errors_are_not_categorized() {
    let categorizer = Categorizer::offline();

    for body in [
        r#"{}"#,
        r#"{"item_name": ""}"#,
        r#"{"item_name": "   ", "list_type": "project"}"#,
        r#"{"item_name": null}"#,
    ] {
        let response = handle(&categorizer, "POST", Some(body)).await;
        assert_eq!(response.status, 400, "body: {}", body);
        assert_eq!(
            json(&response.body),
            serde_json::json!({"error": "item_name is required"})
        );
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    }
}

#[tokio::test]
async fn test_gateway_v2_event() {
    let event: GatewayEvent = serde_json::from_value(serde_json::json!({
        "version": "2.0",
        "routeKey": "POST /categorize-item",
        "requestContext": {"http": {"method": "POST", "path": "/categorize-item"}},
        "headers": {"content-type": "application/json"},
        "body": "{\"item_name\": \"xyzzy\", \"list_type\": \"shopping\"}",
        "isBase64Encoded": false
    }))
    .unwrap();

    let response = handle_event(&Categorizer::offline(), &event).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(
        json(&response.body),
        serde_json::json!({"category": "Other", "confidence": 0.5})
    );
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_gateway_preflight() {
    let event: GatewayEvent = serde_json::from_value(serde_json::json!({
        "httpMethod": "OPTIONS",
        "body": null
    }))
    .unwrap();

    let response = handle_event(&Categorizer::offline(), &event).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "ok");
    assert_eq!(
        response
            .headers
            .get("Access-Control-Allow-Headers")
            .map(String::as_str),
        Some("authorization, x-client-info, apikey, content-type")
    );
}
