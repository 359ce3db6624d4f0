//! HTTP contract tests for the OpenAI chat provider
//!
//! Uses a local mock server; no request ever leaves the process.

use anno_domain::error::Error;
use anno_domain::ports::ChatCompletionProvider;
use anno_providers::OpenAiChatProvider;
use mockito::Matcher;
use std::time::Duration;

fn provider_for(server: &mockito::ServerGuard) -> OpenAiChatProvider {
    OpenAiChatProvider::new(
        "sk-test".to_string(),
        Some(server.url()),
        "gpt-3.5-turbo".to_string(),
        0.7,
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn complete_sends_expected_payload_and_returns_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::AllOf(vec![
            // Temperature is serialized from an f32, so the expectation
            // must widen through the same type
            Matcher::PartialJson(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "temperature": 0.7_f32,
            })),
            Matcher::PartialJson(serde_json::json!({
                "messages": [
                    { "role": "system", "content": "you annotate code" },
                    { "role": "user", "content": "document and code here" },
                ],
            })),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "choices": [
                    { "message": { "role": "assistant", "content": "{\"categories\": {}}" } }
                ]
            }"#,
        )
        .create_async()
        .await;

    let provider = provider_for(&server);
    let content = provider
        .complete("you annotate code", "document and code here")
        .await
        .unwrap();

    assert_eq!(content, "{\"categories\": {}}");
    mock.assert_async().await;
}

#[tokio::test]
async fn complete_maps_api_error_status_to_chat_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": {"message": "invalid api key"}}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let error = provider.complete("s", "u").await.unwrap_err();

    match error {
        Error::Chat { message } => {
            assert!(message.contains("401"));
            assert!(message.contains("invalid api key"));
        }
        other => panic!("Expected Chat error, got {other:?}"),
    }
}

#[tokio::test]
async fn complete_rejects_response_without_choices() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let error = provider.complete("s", "u").await.unwrap_err();
    assert!(matches!(error, Error::Chat { .. }));
}

#[tokio::test]
async fn complete_rejects_non_json_response_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>gateway error</html>")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let error = provider.complete("s", "u").await.unwrap_err();
    assert!(matches!(error, Error::Chat { .. }));
}
