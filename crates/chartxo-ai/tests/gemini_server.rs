//! `GeminiClient` against a local stand-in for the REST endpoint.

use std::thread;

use chartxo_ai::{AiError, AnalysisClient, GeminiClient, GenerativeTransport, GenerateContentRequest};
use chartxo_config::GeminiConfig;
use chartxo_core::ImagePayload;
use serde_json::{Value, json};
use tiny_http::{Header, Response, Server};

const FIXTURE: &str = include_str!("fixtures/analysis.json");

struct Captured {
    url: String,
    api_key: Option<String>,
    body: Value,
}

/// Serve exactly one request with `status`/`body` and hand back what arrived.
fn serve_once(
    status: u16,
    body: String,
    extra_header: Option<(&'static str, &'static str)>,
) -> (String, thread::JoinHandle<Captured>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let handle = thread::spawn(move || {
        let mut request = server.recv().unwrap();
        let mut raw = String::new();
        request.as_reader().read_to_string(&mut raw).unwrap();
        let api_key = request
            .headers()
            .iter()
            .find(|h| h.field.equiv("x-goog-api-key"))
            .map(|h| h.value.as_str().to_string());
        let captured = Captured {
            url: request.url().to_string(),
            api_key,
            body: serde_json::from_str(&raw).unwrap(),
        };

        let mut response = Response::from_string(body)
            .with_status_code(status)
            .with_header(Header::from_bytes("Content-Type", "application/json").unwrap());
        if let Some((name, value)) = extra_header {
            response = response.with_header(Header::from_bytes(name, value).unwrap());
        }
        request.respond(response).unwrap();
        captured
    });
    (format!("http://{addr}/v1beta"), handle)
}

fn client(base_url: String) -> GeminiClient {
    GeminiClient::from_config(&GeminiConfig {
        api_key: "test-key".into(),
        model: "gemini-3-flash-preview".into(),
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

fn candidate(text: &str) -> String {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn analysis_round_trip_through_rest_endpoint() {
    let (base, server) = serve_once(200, candidate(FIXTURE), None);
    let client = AnalysisClient::new(client(base));

    let image = ImagePayload::from_base64("iVBORw0KGgo=", "image/png");
    let analysis = client.analyze(&image).await.unwrap();
    assert_eq!(analysis.detected_pattern, "Bullish Order Block Retest");

    let captured = server.join().unwrap();
    assert_eq!(
        captured.url,
        "/v1beta/models/gemini-3-flash-preview:generateContent"
    );
    assert_eq!(captured.api_key.as_deref(), Some("test-key"));
    assert_eq!(
        captured.body["contents"][0]["parts"][0]["inlineData"]["data"],
        "iVBORw0KGgo="
    );
    assert_eq!(
        captured.body["generationConfig"]["responseSchema"]["required"]
            .as_array()
            .unwrap()
            .len(),
        11
    );
}

#[tokio::test]
async fn google_error_message_is_surfaced() {
    let body = json!({"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}});
    let (base, server) = serve_once(400, body.to_string(), None);

    let image = ImagePayload::from_base64("iVBORw0KGgo=", "image/png");
    let request = GenerateContentRequest::image_and_text(&image, "hello");
    let err = client(base).generate(&request).await.unwrap_err();
    server.join().unwrap();

    match err {
        AiError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn quota_exhaustion_is_rate_limited() {
    let (base, server) = serve_once(429, "{}".to_string(), Some(("Retry-After", "17")));

    let image = ImagePayload::from_base64("iVBORw0KGgo=", "image/png");
    let request = GenerateContentRequest::image_and_text(&image, "hello");
    let err = client(base).generate(&request).await.unwrap_err();
    server.join().unwrap();

    assert!(matches!(
        err,
        AiError::RateLimited {
            retry_after_secs: 17
        }
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_http_error() {
    let image = ImagePayload::from_base64("iVBORw0KGgo=", "image/png");
    let request = GenerateContentRequest::image_and_text(&image, "hello");
    let err = client("http://127.0.0.1:9/v1beta".to_string())
        .generate(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::Http(_)));
}
