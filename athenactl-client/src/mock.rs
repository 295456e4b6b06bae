//! In-memory transport for testing: canned responses by operation, optional
//! echo mode, and a recorded log of every dispatched call.

use crate::error::{TransportError, TransportResult};
use crate::transport::AthenaTransport;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One dispatched call as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub target: String,
    pub payload: JsonValue,
}

#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<HashMap<String, JsonValue>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    echo: bool,
    failure: Arc<Mutex<Option<(String, String, u16)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo mode: every call succeeds and returns its own request payload.
    pub fn echo() -> Self {
        Self { echo: true, ..Self::default() }
    }

    /// Canned response for one operation (API name or full wire target).
    pub fn with_response(self, operation: &str, response: JsonValue) -> Self {
        {
            let mut responses = self.responses.lock().unwrap();
            responses.insert(normalize(operation), response);
        }
        self
    }

    /// Make every subsequent call fail with the given service error.
    pub fn with_service_error(self, code: &str, message: &str, status: u16) -> Self {
        {
            let mut failure = self.failure.lock().unwrap();
            *failure = Some((code.to_string(), message.to_string(), status));
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

fn normalize(operation: &str) -> String {
    operation.strip_prefix("AmazonAthena.").unwrap_or(operation).to_string()
}

#[async_trait]
impl AthenaTransport for MockTransport {
    async fn send(&self, target: &str, payload: &JsonValue) -> TransportResult<JsonValue> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { target: target.to_string(), payload: payload.clone() });

        if let Some((code, message, status)) = self.failure.lock().unwrap().clone() {
            return Err(TransportError::Service { code, message, status });
        }

        if self.echo {
            return Ok(payload.clone());
        }

        let responses = self.responses.lock().unwrap();
        Ok(responses
            .get(&normalize(target))
            .cloned()
            .unwrap_or(JsonValue::Object(serde_json::Map::new())))
    }
}
