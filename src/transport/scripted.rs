//! In-memory transport that replays canned responses

use super::Transport;
use crate::error::{Error, Result};
use crate::types::{JsonValue, VariableMap};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// One request seen by a `ScriptedTransport`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// Query text
    pub query: String,
    /// Variables as sent
    pub variables: VariableMap,
}

/// Replays queued results in order and records every request
///
/// Once the script runs out, further requests fail with a configuration
/// error naming the request number.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<JsonValue>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script that answers with these bodies in order
    pub fn with_responses(bodies: impl IntoIterator<Item = JsonValue>) -> Self {
        Self {
            responses: Mutex::new(bodies.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response body
    pub async fn push_response(&self, body: JsonValue) {
        self.responses.lock().await.push_back(Ok(body));
    }

    /// Queue a failure
    pub async fn push_error(&self, error: Error) {
        self.responses.lock().await.push_back(Err(error));
    }

    /// Requests received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, query: &str, variables: &VariableMap) -> Result<JsonValue> {
        let number = {
            let mut requests = self.requests.lock().await;
            requests.push(RecordedRequest {
                query: query.to_string(),
                variables: variables.clone(),
            });
            requests.len()
        };

        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(Error::config(format!("no scripted response for request {number}"))))
    }
}
