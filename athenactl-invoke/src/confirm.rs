//! Confirmation seam for destructive operations. The invoker consults the
//! gate only when the catalog row's impact is medium or high; a declined
//! confirmation is a clean abort and never reaches the transport.

/// Decides whether a destructive operation may proceed.
pub trait ConfirmGate: Send + Sync {
    /// `summary` is a short human-readable description of the request.
    fn confirm(&self, operation: &str, summary: &str) -> bool;
}

/// Always approves; the `--yes` bypass flag resolves to this gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BypassGate;

impl ConfirmGate for BypassGate {
    fn confirm(&self, _operation: &str, _summary: &str) -> bool {
        true
    }
}

/// Always declines; for non-interactive contexts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyGate;

impl ConfirmGate for DenyGate {
    fn confirm(&self, _operation: &str, _summary: &str) -> bool {
        false
    }
}
