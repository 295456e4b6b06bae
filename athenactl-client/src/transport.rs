use crate::error::TransportResult;
use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// The single remote-call seam. One `send` is one outbound request; signing,
/// auth and connection handling live behind the implementation, while retries
/// and pagination are deliberately absent from this layer. Cancellation is
/// propagated by dropping the returned future.
#[async_trait]
pub trait AthenaTransport: Send + Sync {
    /// Dispatch one operation. `target` is the wire target, e.g.
    /// `AmazonAthena.StartQueryExecution`; `payload` is the request object.
    async fn send(&self, target: &str, payload: &JsonValue) -> TransportResult<JsonValue>;
}
