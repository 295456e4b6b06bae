pub mod confirm;
pub mod error;
pub mod invoker;

// Re-export commonly used types
pub use confirm::{BypassGate, ConfirmGate, DenyGate};
pub use error::{InvokeError, InvokeResult};
pub use invoker::{InvocationContext, InvocationOutcome, InvocationResult, Invoker};
