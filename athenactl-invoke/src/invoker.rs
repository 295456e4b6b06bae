//! The generic command adapter: one stateless request/response translation
//! per invocation, driven entirely by the operation catalog. Bind and
//! validate the input, resolve the output projection, obtain confirmation
//! for destructive operations, dispatch exactly one remote call, and project
//! the response.

use crate::confirm::ConfirmGate;
use crate::error::{InvokeError, InvokeResult};
use athenactl_client::AthenaTransport;
use athenactl_core::{
    bind::{bind_fields, to_payload, BoundFields},
    catalog::find_operation,
    selector::Selector,
    types::OperationDescriptor,
};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Per-call state: owned by exactly one invocation, created at call start
/// and discarded when it completes.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    /// Unique invocation ID for tracing
    pub invocation_id: String,
    /// API name of the operation being invoked
    pub operation: String,
    /// Resolved field values after binding and validation
    pub fields: BoundFields,
}

impl InvocationContext {
    fn new(operation: &str, fields: BoundFields) -> Self {
        Self {
            invocation_id: uuid::Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            fields,
        }
    }
}

/// Result of a completed invocation.
#[derive(Debug, Clone)]
pub struct InvocationResult {
    /// The projected output value
    pub value: JsonValue,
    /// Execution metadata (timing, operation name)
    pub metadata: HashMap<String, JsonValue>,
    /// The per-call context
    pub context: InvocationContext,
}

/// Outcome of one invocation. A declined confirmation is a clean abort,
/// not an error: nothing was dispatched and nothing is produced.
#[derive(Debug, Clone)]
pub enum InvocationOutcome {
    Completed(InvocationResult),
    Declined,
}

impl InvocationOutcome {
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }
}

/// Stateless per-call adapter over a shared transport handle. Invocations
/// are independent; the transport is the only shared state.
pub struct Invoker {
    transport: Arc<dyn AthenaTransport>,
}

impl Invoker {
    pub fn new(transport: Arc<dyn AthenaTransport>) -> Self {
        Self { transport }
    }

    /// Invoke one operation by name. `selector` is the raw `--select` string;
    /// `None` means the operation's documented default projection.
    pub async fn invoke(
        &self,
        operation: &str,
        input: JsonValue,
        selector: Option<&str>,
        gate: &dyn ConfirmGate,
    ) -> InvokeResult<InvocationOutcome> {
        let op = find_operation(operation)
            .ok_or_else(|| InvokeError::UnknownOperation(operation.to_string()))?;

        let input = input
            .as_object()
            .cloned()
            .ok_or_else(|| InvokeError::InvalidInput { operation: op.name.to_string() })?;

        let bound = bind_fields(op, &input).map_err(|e| InvokeError::from_bind(op.name, e))?;

        // Parse-level selector failures abort before any dispatch.
        let selector =
            Selector::parse(selector).map_err(|e| InvokeError::from_selector(op.name, e))?;

        let context = InvocationContext::new(op.name, bound);
        debug!(
            operation = op.name,
            invocation_id = %context.invocation_id,
            "invocation bound and validated"
        );

        if op.confirm_impact.requires_confirmation() {
            let summary = request_summary(op, &context.fields);
            if !gate.confirm(op.name, &summary) {
                info!(operation = op.name, "confirmation declined, aborting without dispatch");
                return Ok(InvocationOutcome::Declined);
            }
        }

        let payload = to_payload(&context.fields);
        let start_time = Instant::now();
        let raw = self
            .transport
            .send(&op.target(), &payload)
            .await
            .map_err(|source| InvokeError::Remote { operation: op.name.to_string(), source })?;
        let duration = start_time.elapsed();

        let value = selector
            .project(op, &raw, &context.fields)
            .map_err(|e| InvokeError::from_selector(op.name, e))?;

        let mut metadata = HashMap::new();
        metadata.insert(
            "duration_ms".to_string(),
            JsonValue::Number(serde_json::Number::from(duration.as_millis() as u64)),
        );
        metadata.insert("operation".to_string(), JsonValue::String(op.name.to_string()));
        metadata
            .insert("invocation_id".to_string(), JsonValue::String(context.invocation_id.clone()));

        Ok(InvocationOutcome::Completed(InvocationResult { value, metadata, context }))
    }
}

/// Short request description shown in confirmation prompts: the operation's
/// bound identifier-like fields, falling back to the field count.
fn request_summary(op: &OperationDescriptor, fields: &BoundFields) -> String {
    let idents: Vec<String> = fields
        .iter()
        .filter_map(|(name, value)| value.as_str().map(|s| format!("{}={}", name, s)))
        .collect();
    if idents.is_empty() {
        format!("{} ({} field(s))", op.name, fields.len())
    } else {
        format!("{} ({})", op.name, idents.join(", "))
    }
}
