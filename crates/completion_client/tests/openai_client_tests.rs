//! Integration tests for OpenAIClient against a mocked completion service

use completion_client::{ClientError, CompletionClientTrait, Config, Message, OpenAIClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> Config {
    Config {
        api_key: Some("sk-test".to_string()),
        api_base: format!("{}/v1", server.uri()),
        timeout_secs: 1,
        ..Config::default()
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    })
}

fn messages() -> Vec<Message> {
    vec![Message::system("system prompt"), Message::user("an idea")]
}

#[tokio::test]
async fn sends_single_authorized_request_with_model_temperature_and_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.7,
            "messages": [
                { "role": "system", "content": "system prompt" },
                { "role": "user", "content": "an idea" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("{\"ok\":true}")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenAIClient::new(test_config(&mock_server)).expect("client");
    let text = client.complete(messages()).await.expect("completion");

    assert_eq!(text, "{\"ok\":true}");
}

#[tokio::test]
async fn returns_text_verbatim_even_when_not_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("I cannot comply")))
        .mount(&mock_server)
        .await;

    let client = OpenAIClient::new(test_config(&mock_server)).expect("client");
    let text = client.complete(messages()).await.expect("completion");

    assert_eq!(text, "I cannot comply");
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string(r#"{"error": "Service Unavailable"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenAIClient::new(test_config(&mock_server)).expect("client");
    let err = client.complete(messages()).await.unwrap_err();

    match err {
        ClientError::Api { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("Service Unavailable"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_envelope_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = OpenAIClient::new(test_config(&mock_server)).expect("client");
    let err = client.complete(messages()).await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn envelope_without_choices_is_an_empty_completion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&mock_server)
        .await;

    let client = OpenAIClient::new(test_config(&mock_server)).expect("client");
    let err = client.complete(messages()).await.unwrap_err();

    assert!(matches!(err, ClientError::EmptyCompletion), "got {err:?}");
}

#[tokio::test]
async fn missing_api_key_never_reaches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("{}")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = Config {
        api_key: None,
        ..test_config(&mock_server)
    };
    let client = OpenAIClient::new(config).expect("client");
    let err = client.complete(messages()).await.unwrap_err();

    assert!(matches!(err, ClientError::MissingApiKey), "got {err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("{}"))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = OpenAIClient::new(test_config(&mock_server)).expect("client");
    let err = client.complete(messages()).await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}
