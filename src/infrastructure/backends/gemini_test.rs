use anyhow::Result;
use test_utils::gemini_empty_body;
use test_utils::gemini_multipart_body;
use test_utils::gemini_reply_body;

use super::wire_role;
use super::Content;
use super::ContentPart;
use super::Gemini;
use super::GenerateContentRequest;
use super::SystemInstruction;
use crate::domain::models::Backend;
use crate::domain::models::CompletionRequest;
use crate::domain::models::Speaker;
use crate::domain::models::Turn;

impl Gemini {
    fn with_url(url: String) -> Gemini {
        return Gemini {
            url,
            token: "abc".to_string(),
            model: "model-1".to_string(),
            health_check_timeout: "200".to_string(),
            request_timeout: "500".to_string(),
        };
    }
}

fn staged_request() -> CompletionRequest {
    return CompletionRequest {
        system_instruction: "You are a test harness.".to_string(),
        history: vec![
            Turn::new(Speaker::User, "Hello"),
            Turn::new(Speaker::Assistant, "Hi, ask me anything."),
            Turn::new(Speaker::User, "What does Shuo research?"),
        ],
    };
}

#[test]
fn it_maps_speakers_to_wire_roles() {
    insta::assert_snapshot!(wire_role(Speaker::User), @"user");
    insta::assert_snapshot!(wire_role(Speaker::Assistant), @"model");
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/model-1?key=abc")
        .with_status(200)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/model-1?key=abc")
        .with_status(500)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_without_token() {
    let backend = Gemini {
        url: "http://localhost:1".to_string(),
        token: "".to_string(),
        model: "model-1".to_string(),
        health_check_timeout: "200".to_string(),
        request_timeout: "500".to_string(),
    };

    let res = backend.health_check().await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_gets_completions() -> Result<()> {
    let expected = GenerateContentRequest {
        contents: vec![
            Content {
                role: "user".to_string(),
                parts: vec![ContentPart {
                    text: "Hello".to_string(),
                }],
            },
            Content {
                role: "model".to_string(),
                parts: vec![ContentPart {
                    text: "Hi, ask me anything.".to_string(),
                }],
            },
            Content {
                role: "user".to_string(),
                parts: vec![ContentPart {
                    text: "What does Shuo research?".to_string(),
                }],
            },
        ],
        system_instruction: SystemInstruction {
            parts: vec![ContentPart {
                text: "You are a test harness.".to_string(),
            }],
        },
    };

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/model-1:generateContent?key=abc")
        .match_body(mockito::Matcher::Json(serde_json::to_value(&expected)?))
        .with_status(200)
        .with_body(gemini_reply_body("He researches HCI."))
        .create();

    let backend = Gemini::with_url(server.url());
    let reply = backend.complete(staged_request()).await?;

    mock.assert();
    assert_eq!(reply.text, "He researches HCI.");

    return Ok(());
}

#[tokio::test]
async fn it_joins_multipart_replies() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body(gemini_multipart_body(&["He works on HCI", " and rendering."]))
        .create();

    let backend = Gemini::with_url(server.url());
    let reply = backend.complete(staged_request()).await?;

    mock.assert();
    assert_eq!(reply.text, "He works on HCI and rendering.");

    return Ok(());
}

#[tokio::test]
async fn it_returns_empty_text_for_empty_candidates() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body(gemini_empty_body())
        .create();

    let backend = Gemini::with_url(server.url());
    let reply = backend.complete(staged_request()).await?;

    mock.assert();
    assert_eq!(reply.text, "");

    return Ok(());
}

#[tokio::test]
async fn it_returns_empty_text_for_a_bare_reply() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body("{}")
        .create();

    let backend = Gemini::with_url(server.url());
    let reply = backend.complete(staged_request()).await?;

    mock.assert();
    assert_eq!(reply.text, "");

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_http_errors() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/model-1:generateContent?key=abc")
        .with_status(500)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.complete(staged_request()).await;

    mock.assert();
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_on_malformed_payloads() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/model-1:generateContent?key=abc")
        .with_status(200)
        .with_body("pardon?")
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.complete(staged_request()).await;

    mock.assert();
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_without_token() {
    let backend = Gemini {
        url: "http://localhost:1".to_string(),
        token: "".to_string(),
        model: "model-1".to_string(),
        health_check_timeout: "200".to_string(),
        request_timeout: "500".to_string(),
    };

    let res = backend.complete(staged_request()).await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_fails_on_an_invalid_request_timeout() {
    let backend = Gemini {
        url: "http://localhost:1".to_string(),
        token: "abc".to_string(),
        model: "model-1".to_string(),
        health_check_timeout: "200".to_string(),
        request_timeout: "never".to_string(),
    };

    let res = backend.complete(staged_request()).await;
    assert!(res.is_err());
}
