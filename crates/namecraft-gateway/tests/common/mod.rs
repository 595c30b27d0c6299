#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use namecraft_core::{CompletionBackend, CompletionError, CompletionRequest, CompletionResult};

/// Three Greek records, as a well-behaved model would answer.
pub const GREEK_REPLY: &str = "Here are three names:

NAME1: Andromeda
ORIGINAL_SCRIPT1: Ἀνδρομέδα
ORIGIN1: Greek mythology
MEANING1: Ruler of men; strength of leadership
EXPLANATION1: A girl's name tied to strength.

NAME2: Alkmene
ORIGINAL_SCRIPT2: Ἀλκμήνη
ORIGIN2: Ancient Greek
MEANING2: Strength of the moon
EXPLANATION2: Carries alke, strength.

NAME3: Iphis
ORIGINAL_SCRIPT3: Ἶφις
ORIGIN3: Greek
MEANING3: Strong, mighty
EXPLANATION3: Rare and strong.
";

/// Backend returning a fixed reply and recording every request.
pub struct StubBackend {
    reply: Option<String>,
    pub seen: Mutex<Vec<CompletionRequest>>,
}

impl StubBackend {
    pub fn new(reply: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.map(str::to_string),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CompletionBackend for StubBackend {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<Option<String>> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Backend that always fails the way an unreachable upstream does.
pub struct FailingBackend;

#[async_trait]
impl CompletionBackend for FailingBackend {
    async fn complete(&self, _: &CompletionRequest) -> CompletionResult<Option<String>> {
        Err(CompletionError::Upstream(503, "upstream overloaded: secret-detail".to_string()))
    }
}

/// Serve `app` on an ephemeral local port and return its address.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
