//! Mock prediction service for testing
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use capacity_predict::error::{Error, Result};
use capacity_predict::service::PredictionService;
use capacity_predict::types::{PredictedValue, RequestPayload};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;
use url::Url;

/// Canned reply for one `predict` call
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 2xx with this value (Null = result field missing)
    Value(serde_json::Value),
    /// Connection could not be made
    Transport,
    /// Non-2xx with an optional `error` message
    Service(u16, Option<String>),
    /// 2xx with a body that is not JSON
    Malformed,
}

impl MockReply {
    fn into_result(self) -> Result<PredictedValue> {
        match self {
            Self::Value(value) => Ok(PredictedValue(value)),
            Self::Transport => Err(Error::Transport("connection refused".to_string())),
            Self::Service(status, message) => Err(Error::Service { status, message }),
            Self::Malformed => Err(Error::MalformedResponse("expected value".to_string())),
        }
    }
}

/// Simple mock prediction service
///
/// Features:
/// - Queued replies (the last one repeats once the queue is drained)
/// - Call tracking for payload verification
/// - Optional hold so a request stays in flight until released
pub struct MockPredictionService {
    endpoint: Url,
    replies: Mutex<VecDeque<MockReply>>,
    calls: Mutex<Vec<RequestPayload>>,
    hold: AtomicBool,
    started: Notify,
    release: Notify,
}

impl MockPredictionService {
    /// Create a mock that answers `{"Reversible_capacity": 123.4}`
    pub fn new() -> Self {
        Self {
            endpoint: Url::parse("http://mock.invalid/api/predict/").unwrap(),
            replies: Mutex::new(VecDeque::from([MockReply::Value(serde_json::json!(123.4))])),
            calls: Mutex::new(Vec::new()),
            hold: AtomicBool::new(false),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Create a mock answering with `replies`, in order
    pub fn with_replies(replies: impl IntoIterator<Item = MockReply>) -> Self {
        let mock = Self::new();
        *mock.replies.lock().unwrap() = replies.into_iter().collect();
        mock
    }

    /// Keep every request in flight until [`release_one`](Self::release_one)
    pub fn hold_requests(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }

    /// Let one held request complete
    pub fn release_one(&self) {
        self.release.notify_one();
    }

    /// Wait until a request has reached the service
    pub async fn wait_for_request(&self) {
        self.started.notified().await;
    }

    /// Payloads received so far
    pub fn calls(&self) -> Vec<RequestPayload> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> MockReply {
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies
                .front()
                .cloned()
                .unwrap_or(MockReply::Value(serde_json::Value::Null))
        }
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(&self, payload: &RequestPayload) -> Result<PredictedValue> {
        self.calls.lock().unwrap().push(payload.clone());
        let reply = self.next_reply();

        self.started.notify_one();
        if self.hold.load(Ordering::SeqCst) {
            self.release.notified().await;
        }

        reply.into_result()
    }

    fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
