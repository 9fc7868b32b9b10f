use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use text_completion::{CompletionError, CompletionHandler};
use tower::ServiceExt;
use web::{router, AppState, CombinedResponse};

/// Answers with the prompt it received.
#[derive(Default)]
struct EchoHandler {
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl CompletionHandler for EchoHandler {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(prompt.to_string())
    }
}

struct FailingHandler(CompletionError);

#[async_trait]
impl CompletionHandler for FailingHandler {
    async fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Err(self.0.clone())
    }
}

fn app(handler: Arc<dyn CompletionHandler>) -> Router {
    router(AppState {
        handler: Some(handler),
    })
}

fn app_without_key() -> Router {
    router(AppState { handler: None })
}

fn explain_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/explain/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_root() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app_without_key(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Grade-Specific GPT Responses API");
    assert_eq!(body["documentation"]["Swagger UI (Interactive)"], "/docs");
    assert_eq!(body["documentation"]["ReDoc"], "/redoc");
    assert!(body["usage"].as_str().unwrap().contains("/explain/"));
}

#[tokio::test]
async fn test_explain_both_grades() {
    let handler = Arc::new(EchoHandler::default());
    let (status, body) = send(
        app(handler.clone()),
        explain_request(r#"{"question": "Why is the sky blue?"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let resp: CombinedResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.question, "Why is the sky blue?");
    assert_eq!(resp.grade2_response.grade, 2);
    assert!(resp.grade2_response.explanation.contains("Grade 2"));
    assert!(resp.grade2_response.explanation.contains("Why is the sky blue?"));
    assert_eq!(resp.grade5_response.grade, 5);
    assert!(resp.grade5_response.explanation.contains("Grade 5"));

    let prompts = handler.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Grade 2"));
    assert!(prompts[1].contains("Grade 5"));
}

#[tokio::test]
async fn test_explain_without_trailing_slash() {
    let req = Request::builder()
        .method("POST")
        .uri("/explain")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"question": "What is rain?"}"#))
        .unwrap();
    let (status, body) = send(app(Arc::new(EchoHandler::default())), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "What is rain?");
}

#[tokio::test]
async fn test_explain_without_content_type() {
    let req = Request::builder()
        .method("POST")
        .uri("/explain/")
        .body(Body::from(r#"{"question": "What is rain?"}"#))
        .unwrap();
    let (status, body) = send(app(Arc::new(EchoHandler::default())), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "What is rain?");
    assert_eq!(body["grade5_response"]["grade"], 5);
}

#[tokio::test]
async fn test_explain_wrong_content_type() {
    let req = Request::builder()
        .method("POST")
        .uri("/explain/")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"question": "What is rain?"}"#))
        .unwrap();
    let (status, body) = send(app(Arc::new(EchoHandler::default())), req).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_explain_empty_question_is_forwarded() {
    let handler = Arc::new(EchoHandler::default());
    let (status, body) = send(app(handler.clone()), explain_request(r#"{"question": ""}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "");
    assert_eq!(handler.prompts.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_explain_completion_error() {
    let err = CompletionError::Api {
        status: 401,
        message: "Incorrect API key provided".to_string(),
    };
    let (status, body) = send(
        app(Arc::new(FailingHandler(err.clone()))),
        explain_request(r#"{"question": "Why?"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": err.to_string() }));
}

#[tokio::test]
async fn test_explain_rate_limited() {
    let err = CompletionError::Api {
        status: 429,
        message: "Rate limit reached".to_string(),
    };
    let (status, body) = send(
        app(Arc::new(FailingHandler(err.clone()))),
        explain_request(r#"{"question": "Why?"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], err.to_string());
}

#[tokio::test]
async fn test_explain_unreachable_backend() {
    let err = CompletionError::Transport("connection refused".to_string());
    let (status, body) = send(
        app(Arc::new(FailingHandler(err.clone()))),
        explain_request(r#"{"question": "Why?"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["detail"], err.to_string());
}

#[tokio::test]
async fn test_explain_missing_api_key() {
    let (status, body) = send(app_without_key(), explain_request(r#"{"question": "Why?"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "OpenAI API key not found" }));
}

#[tokio::test]
async fn test_explain_missing_question() {
    let (status, body) = send(
        app(Arc::new(EchoHandler::default())),
        explain_request(r#"{"topic": "rain"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Failed to deserialize the JSON body into the target type"));
    assert!(detail.contains("missing field `question`"));
}

#[tokio::test]
async fn test_explain_invalid_json() {
    let (status, body) = send(
        app(Arc::new(EchoHandler::default())),
        explain_request("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_docs_pages() {
    for path in ["/docs", "/redoc"] {
        let req = Request::builder().uri(path).body(Body::empty()).unwrap();
        let resp = app_without_key().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("/openapi.json"));
    }

    let req = Request::builder().uri("/openapi.json").body(Body::empty()).unwrap();
    let (status, body) = send(app_without_key(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Grade-Specific GPT Responses API");
}
