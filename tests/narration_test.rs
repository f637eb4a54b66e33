//! Integration tests for the narration clients against mock services

use match_analyst::{
    analysis::MatchSummary,
    narration::{GeminiClient, HuggingFaceClient, Narration, Narrator, TextGenerator},
    NarrationStyle,
};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn gemini_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    let response = if status == 200 {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "Griezmann opened the scoring" },
                            { "text": " and France never looked back." }
                        ]
                    }
                }
            ]
        }))
    } else {
        ResponseTemplate::new(status)
    };

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(query_param("key", "secret"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    server
}

async fn hugging_face_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gpt2"))
        .and(header("authorization", "Bearer hf_token"))
        .and(body_partial_json(json!({ "parameters": { "num_return_sequences": 1 } })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": "A quiet evening in Moscow." }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    server
}

fn gemini(server: &MockServer) -> GeminiClient {
    GeminiClient::new(reqwest::Client::new(), &server.uri(), "gemini-test", "secret")
}

fn hugging_face(server: &MockServer) -> HuggingFaceClient {
    HuggingFaceClient::new(reqwest::Client::new(), &server.uri(), "gpt2", "hf_token")
}

#[tokio::test]
async fn test_gemini_joins_response_parts() {
    let server = gemini_server(200).await;

    let text = gemini(&server).generate("narrate").await.unwrap();

    assert_eq!(text, "Griezmann opened the scoring and France never looked back.");
}

#[tokio::test]
async fn test_gemini_sends_prompt_as_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "narrate this" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(gemini(&server).generate("narrate this").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_gemini_empty_candidates_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = gemini(&server).generate("narrate").await.unwrap_err();
    assert!(err.to_string().contains("no text"));
}

#[tokio::test]
async fn test_hugging_face_generation() {
    let server = hugging_face_server().await;

    let text = hugging_face(&server).generate("narrate").await.unwrap();

    assert_eq!(text, "A quiet evening in Moscow.");
}

#[tokio::test]
async fn test_narrator_falls_back_to_hugging_face() {
    let primary = gemini_server(503).await;
    let fallback = hugging_face_server().await;
    let generators: Vec<Box<dyn TextGenerator>> =
        vec![Box::new(gemini(&primary)), Box::new(hugging_face(&fallback))];
    let narrator = Narrator::new(generators);

    let narration = narrator
        .narrate(&MatchSummary::NoNotableEvents, NarrationStyle::Technical)
        .await;

    assert_eq!(
        narration,
        Narration::Generated {
            provider: "huggingface".to_string(),
            text: "A quiet evening in Moscow.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_narrator_reports_when_every_service_fails() {
    let primary = gemini_server(500).await;
    let fallback = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&fallback)
        .await;
    let generators: Vec<Box<dyn TextGenerator>> =
        vec![Box::new(gemini(&primary)), Box::new(hugging_face(&fallback))];
    let narrator = Narrator::new(generators);

    let narration = narrator
        .narrate(&MatchSummary::NoNotableEvents, NarrationStyle::Formal)
        .await;

    match narration {
        Narration::Unavailable { message } => {
            assert!(message.contains("gemini"));
            assert!(message.contains("huggingface"));
        }
        other => panic!("Expected Unavailable, got {other:?}"),
    }
}
