// tests/test_helpers.rs
// Shared fixtures for HTTP-level tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use foresight::llm::{Generation, LlmClient};
use foresight::web::{create_router, state::AppState};
use foresight::{ForesightError, Result};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// How the stub answers
pub enum StubReply {
    Text(String),
    Empty,
    Fail,
}

/// In-process model client that counts calls and remembers the last prompt
pub struct StubLlm {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubLlm {
    fn with_reply(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn text(text: &str) -> Arc<Self> {
        Self::with_reply(StubReply::Text(text.to_string()))
    }

    pub fn empty() -> Arc<Self> {
        Self::with_reply(StubReply::Empty)
    }

    pub fn failing() -> Arc<Self> {
        Self::with_reply(StubReply::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn generate(&self, prompt: &str) -> Result<Generation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            StubReply::Text(text) => Ok(Generation {
                request_id: "stub".to_string(),
                text: Some(text.clone()),
                finish_reason: Some("STOP".to_string()),
                ..Generation::default()
            }),
            StubReply::Empty => Ok(Generation {
                request_id: "stub".to_string(),
                ..Generation::default()
            }),
            StubReply::Fail => Err(ForesightError::Llm(
                "Gemini API error 503: backend unavailable".to_string(),
            )),
        }
    }

    fn model_name(&self) -> String {
        "stub-model".to_string()
    }
}

/// Router wired to the given client
pub fn app(llm: Arc<dyn LlmClient>) -> Router {
    create_router(AppState::new(llm))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// POST a raw JSON body and decode the JSON response
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = body_bytes(response).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// GET a path and return the body as text
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = body_bytes(response).await;
    (status, String::from_utf8(bytes).unwrap())
}
