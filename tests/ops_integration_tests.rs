//! Integration tests for the comfort flow and its HTTP collaborators.
//!
//! The completion and image APIs are replaced by mockito servers.


use mockito::Matcher;
use moodbuddy::ai::{ChatClient, Message};
use moodbuddy::errors::{AIError, AppError, ImageError};
use moodbuddy::images::ImageClient;
use moodbuddy::ops::Comforter;
use moodbuddy::response::Section;
use moodbuddy::{Config, Journal, SentimentLabel, Who};
use std::io::Write;
use std::time::{Duration, Instant};
use test_helpers::{chat_body, image_body};

const TIMEOUT: Duration = Duration::from_secs(5);

fn config_for(completion_url: String, image_url: String) -> Config {
    Config {
        api_key: Some("test-key".to_string()),
        image_key: Some("img-key".to_string()),
        completion_url,
        image_url,
        ..Config::default()
    }
}

#[test]
fn test_chat_returns_first_choice() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "llama3-8b-8192",
            "messages": [{ "role": "user", "content": "hello" }]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body("**Comfort:** hi"))
        .create();

    let client = ChatClient::new(server.url(), "test-key", TIMEOUT).unwrap();
    let reply = client
        .chat("llama3-8b-8192", &[Message::user("hello")])
        .unwrap();

    assert_eq!(reply, "**Comfort:** hi");
    mock.assert();
}

#[test]
fn test_chat_error_statuses() {
    let mut server = mockito::Server::new();
    let client = ChatClient::new(server.url(), "bad-key", TIMEOUT).unwrap();
    let messages = [Message::user("hello")];

    let unauthorized = server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .create();
    assert!(matches!(
        client.chat("m", &messages),
        Err(AppError::AI(AIError::Unauthorized(401)))
    ));
    unauthorized.remove();

    let not_found = server
        .mock("POST", "/chat/completions")
        .with_status(404)
        .create();
    match client.chat("missing-model", &messages) {
        Err(AppError::AI(AIError::ModelNotFound(model))) => assert_eq!(model, "missing-model"),
        other => panic!("Expected ModelNotFound, got {:?}", other),
    }
    not_found.remove();

    let _server_error = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("overloaded")
        .create();
    match client.chat("m", &messages) {
        Err(AppError::AI(AIError::InvalidResponse(msg))) => assert!(msg.contains("overloaded")),
        other => panic!("Expected InvalidResponse, got {:?}", other),
    }
}

#[test]
fn test_chat_malformed_and_empty_responses() {
    let mut server = mockito::Server::new();
    let client = ChatClient::new(server.url(), "k", TIMEOUT).unwrap();
    let messages = [Message::user("hello")];

    let no_choices = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": []}"#)
        .create();
    match client.chat("m", &messages) {
        Err(AppError::AI(AIError::InvalidResponse(msg))) => assert!(msg.contains("no choices")),
        other => panic!("Expected InvalidResponse, got {:?}", other),
    }
    no_choices.remove();

    let _garbage = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create();
    assert!(matches!(
        client.chat("m", &messages),
        Err(AppError::AI(AIError::InvalidResponse(_)))
    ));
}

#[test]
fn test_chat_unreachable() {
    // Port 9 (discard) is not listening on test machines
    let client = ChatClient::new("http://127.0.0.1:9", "k", Duration::from_secs(2)).unwrap();
    assert!(matches!(
        client.chat("m", &[Message::user("hello")]),
        Err(AppError::AI(AIError::Unreachable(_)))
    ));
}

#[test]
fn test_chat_slow_body_times_out() {
    let mut server = mockito::Server::new();
    let _slow = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(chat_body("too late").as_bytes())
        })
        .create();

    let client = ChatClient::new(server.url(), "k", Duration::from_millis(500)).unwrap();
    let started = Instant::now();
    let result = client.chat("m", &[Message::user("hello")]);

    assert!(started.elapsed() < Duration::from_secs(3));
    match result {
        Err(AppError::AI(AIError::Unreachable(e))) => assert!(e.is_timeout()),
        other => panic!("Expected Unreachable timeout, got {:?}", other),
    }
}

#[test]
fn test_image_slow_body_times_out() {
    let mut server = mockito::Server::new();
    let _slow = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_secs(3));
            w.write_all(image_body(&["https://images.example/late.jpg"]).as_bytes())
        })
        .create();

    let client = ImageClient::new(
        server.url(),
        Some("img-key".to_string()),
        Duration::from_millis(500),
    )
    .unwrap();
    let started = Instant::now();
    let result = client.search("soup");

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(matches!(
        result,
        Err(AppError::Image(ImageError::Unreachable(_)))
    ));
}

#[test]
fn test_image_search() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "Miso soup".into()),
            Matcher::UrlEncoded("per_page".into(), "1".into()),
            Matcher::UrlEncoded("client_id".into(), "img-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(image_body(&["https://images.example/miso.jpg"]))
        .create();

    let client = ImageClient::new(server.url(), Some("img-key".to_string()), TIMEOUT).unwrap();
    assert_eq!(
        client.search("Miso soup").unwrap().as_deref(),
        Some("https://images.example/miso.jpg")
    );
    mock.assert();
}

#[test]
fn test_image_search_without_results_and_errors() {
    let mut server = mockito::Server::new();
    let client = ImageClient::new(server.url(), Some("img-key".to_string()), TIMEOUT).unwrap();

    let empty = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(image_body(&[]))
        .create();
    assert_eq!(client.search("nothing").unwrap(), None);
    empty.remove();

    let _limited = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(403)
        .create();
    assert!(matches!(
        client.search("soup"),
        Err(AppError::Image(ImageError::Status(403)))
    ));
}

#[test]
fn test_ai_comfort_flow_end_to_end() {
    let mut chat_server = mockito::Server::new();
    let mut image_server = mockito::Server::new();

    let response = "Here you go!\n\
        **Comfort:** Take a breath, you're doing your best.\n\
        **Recipe:** Miso soup — light and warm\n\
        **Vibe:** 🌿 — Teal, Lavender\n\
        **Song:** 'Weightless' — Marconi Union\n\
        **Anti-Stress Activity:** Breathe in for four,\nout for six.";

    let chat = chat_server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("Anti-Stress Activity".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body(response))
        .create();
    let image = image_server
        .mock("GET", "/search/photos")
        .match_query(Matcher::UrlEncoded("query".into(), "Miso soup".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(image_body(&["https://images.example/miso.jpg"]))
        .create();

    let comforter =
        Comforter::from_config(&config_for(chat_server.url(), image_server.url())).unwrap();
    let mut journal = Journal::new();

    let outcome = comforter
        .comfort(&mut journal, "I'm so stressed about tomorrow", Who::Ai)
        .unwrap();

    assert_eq!(outcome.entry.sentiment.label, SentimentLabel::VeryNegative);
    assert_eq!(outcome.entry.raw_response, response);
    assert_eq!(outcome.fields.len(), 5);
    assert_eq!(
        outcome.fields.get(Section::AntiStressActivity),
        Some("Breathe in for four,\nout for six.")
    );
    assert_eq!(outcome.card.dish_name(), "Miso soup");
    assert_eq!(
        outcome.image_url.as_deref(),
        Some("https://images.example/miso.jpg")
    );
    assert_eq!(journal.len(), 1);

    chat.assert();
    image.assert();
}

#[test]
fn test_image_failure_does_not_fail_comfort() {
    let mut chat_server = mockito::Server::new();
    let mut image_server = mockito::Server::new();

    let _chat = chat_server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body("**Recipe:** Tacos — crunchy"))
        .create();
    let _image = image_server
        .mock("GET", "/search/photos")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let comforter =
        Comforter::from_config(&config_for(chat_server.url(), image_server.url())).unwrap();
    let mut journal = Journal::new();

    let outcome = comforter
        .comfort(&mut journal, "I had a nice day", Who::Ai)
        .unwrap();

    assert_eq!(outcome.image_url, None);
    assert_eq!(outcome.card.comfort, "No comfort provided.");
    assert_eq!(journal.len(), 1);
}

#[test]
fn test_completion_failure_leaves_journal_untouched() {
    let mut chat_server = mockito::Server::new();
    let _chat = chat_server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .create();

    let comforter = Comforter::from_config(&config_for(
        chat_server.url(),
        "http://127.0.0.1:9".to_string(),
    ))
    .unwrap();
    let mut journal = Journal::new();

    let result = comforter.comfort(&mut journal, "meh", Who::Ai);
    assert!(matches!(result, Err(AppError::AI(AIError::Unauthorized(401)))));
    assert!(journal.is_empty());
}
