use mockito::{Matcher, Server};
use serde_json::json;
use tokenloom_llm::{CompletionRequest, ModelClient, OllamaClient, OpenAIClient, RequestLimits};

fn request() -> CompletionRequest {
    CompletionRequest::new("You choose brand colors.", "Palette for a bakery")
        .with_limits(RequestLimits::new(5, 0))
}

#[tokio::test]
async fn test_openai_returns_message_json() {
    let mut server = Server::new_async().await;
    let body = json!({
        "choices": [{
            "message": { "content": "```json\n{\"primary\": \"#b45309\", \"neutral\": \"#78716c\"}\n```" }
        }]
    });
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-test",
            "response_format": { "type": "json_object" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = OpenAIClient::new(
        Some("sk-test".into()),
        Some(server.url()),
        Some("gpt-test".into()),
    )
    .unwrap();
    let value = client.complete(request()).await.unwrap();

    assert_eq!(value["primary"], "#b45309");
    assert_eq!(value["neutral"], "#78716c");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_http_error_surfaces() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body("{\"error\": \"bad key\"}")
        .create_async()
        .await;

    let client = OpenAIClient::new(Some("sk-bad".into()), Some(server.url()), None).unwrap();
    let err = client.complete(request()).await.unwrap_err();
    assert!(format!("{err:#}").contains("401"));
}

#[tokio::test]
async fn test_openai_non_object_is_rejected() {
    let mut server = Server::new_async().await;
    let body = json!({ "choices": [{ "message": { "content": "[\"#b45309\"]" } }] });
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = OpenAIClient::new(Some("sk-test".into()), Some(server.url()), None).unwrap();
    assert!(client.complete(request()).await.is_err());
}

#[tokio::test]
async fn test_ollama_requests_json_format() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-test",
            "format": "json",
            "stream": false
        })))
        .with_status(200)
        .with_body(json!({ "response": "{\"warmth\": 3}" }).to_string())
        .create_async()
        .await;

    let client = OllamaClient::new(Some(server.url()), Some("llama-test".into()));
    assert_eq!(client.model(), "llama-test");
    let value = client.complete(request()).await.unwrap();
    assert_eq!(value["warmth"], 3);
    mock.assert_async().await;
}
