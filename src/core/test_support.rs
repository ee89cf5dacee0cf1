use crate::domain::model::TransportResponse;
use crate::domain::ports::HttpTransport;
use crate::utils::error::{Result, SubmitterError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub bearer_token: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone)]
pub enum FakeReply {
    Status(u16, String),
    Unreachable,
    BadUrl,
}

/// Scripted transport: replies are consumed in order, requests are recorded.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Arc<Mutex<VecDeque<FakeReply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeTransport {
    pub fn new(replies: Vec<FakeReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> FakeReply {
        FakeReply::Status(status, body.to_string())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: Option<&str>,
        body: &serde_json::Value,
    ) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            bearer_token: bearer_token.map(str::to_string),
            body: body.clone(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("FakeTransport ran out of scripted replies");

        match reply {
            FakeReply::Status(status, body) => Ok(TransportResponse::new(status, body)),
            FakeReply::Unreachable => Err(SubmitterError::Unreachable {
                message: "connection refused".to_string(),
            }),
            FakeReply::BadUrl => Err(SubmitterError::invalid_input("url", "relative URL")),
        }
    }
}
