use categorize_item::{CategorizerConfig, Categorizer, ListType, ResultSource};
use httpmock::prelude::*;

fn config_for(server: &MockServer) -> CategorizerConfig {
    CategorizerConfig {
        api_url: server.url("/v1/messages"),
        timeout_seconds: Some(5),
        ..Default::default()
    }
    .with_api_key("sk-test-key")
}

fn completion(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-3-haiku-20240307",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 80, "output_tokens": 12}
    })
}

#[tokio::test]
async fn test_remote_classification_success() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .header("x-api-key", "sk-test-key")
            .header("anthropic-version", "2023-06-01")
            .body_contains("Item: \\\"kiwi\\\"")
            .body_contains("Refrigerated")
            .json_body_partial(r#"{"model": "claude-3-haiku-20240307", "max_tokens": 100}"#);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion(r#"{"category": "Produce", "confidence": 0.97}"#));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("kiwi", ListType::Grocery)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.category.as_deref(), Some("Produce"));
    assert_eq!(result.confidence, 0.97);
    assert_eq!(result.source, ResultSource::Remote);
}

#[tokio::test]
async fn test_shopping_prompt_uses_shopping_vocabulary() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .body_contains("shopping list item")
            .body_contains("Sports & Outdoors");
        then.status(200)
            .json_body(completion(r#"{"category": "Shoes", "confidence": 0.88}"#));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("trail runners", ListType::Shopping)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.category.as_deref(), Some("Shoes"));
    assert_eq!(result.confidence, 0.88);
}

#[tokio::test]
async fn test_out_of_vocabulary_category_is_normalized() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .json_body(completion(r#"{"category": "Sneakers", "confidence": 0.99}"#));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("running shoes", ListType::Shopping)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.category.as_deref(), Some("Other"));
    assert_eq!(result.confidence, 0.5);
}

#[tokio::test]
async fn test_api_error_status_falls_back() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(529)
            .json_body(serde_json::json!({"type": "error", "error": {"type": "overloaded_error"}}));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("running shoes", ListType::Shopping)
        .await
        .unwrap();

    // 單次請求，不重試
    api_mock.assert_hits(1);
    assert_eq!(result.category.as_deref(), Some("Shoes"));
    assert_eq!(result.confidence, 0.3);
    assert_eq!(result.source, ResultSource::Fallback);
}

#[tokio::test]
async fn test_malformed_completion_falls_back() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .json_body(completion("Sure! That item belongs in Refrigerated."));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("milk", ListType::Grocery)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.category.as_deref(), Some("Refrigerated"));
    assert_eq!(result.confidence, 0.3);
}

#[tokio::test]
async fn test_non_json_body_falls_back() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200).body("<html>gateway</html>");
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("xyzzy", ListType::Grocery)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(result.category.as_deref(), Some("Other"));
    assert_eq!(result.confidence, 0.3);
}

#[tokio::test]
async fn test_unreachable_endpoint_falls_back() {
    let config = CategorizerConfig {
        api_url: "http://127.0.0.1:1/v1/messages".to_string(),
        timeout_seconds: Some(5),
        ..Default::default()
    }
    .with_api_key("sk-test-key");

    let categorizer = Categorizer::from_config(&config).unwrap();
    let result = categorizer
        .categorize_item("dog food", ListType::Grocery)
        .await
        .unwrap();

    assert_eq!(result.category.as_deref(), Some("Pet Supplies"));
    assert_eq!(result.confidence, 0.3);
}

#[tokio::test]
async fn test_project_list_never_calls_the_api() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .json_body(completion(r#"{"category": "Produce", "confidence": 0.9}"#));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer
        .categorize_item("milk", ListType::Project)
        .await
        .unwrap();

    api_mock.assert_hits(0);
    assert_eq!(result.category, None);
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn test_blank_item_never_calls_the_api() {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .json_body(completion(r#"{"category": "Produce", "confidence": 0.9}"#));
    });

    let categorizer = Categorizer::from_config(&config_for(&server)).unwrap();
    let result = categorizer.categorize_item("   ", ListType::Grocery).await;

    api_mock.assert_hits(0);
    assert!(result.is_err());
}
