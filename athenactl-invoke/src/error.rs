//! Error taxonomy of a single invocation. Every variant aborts the call and
//! propagates to the caller; a declined confirmation is not an error (see
//! `InvocationOutcome::Declined`).

use athenactl_client::TransportError;
use athenactl_core::{BindError, SelectorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("{operation}: required field '{field}' is missing")]
    MissingRequiredField { operation: String, field: String },

    #[error("{operation}: unknown field '{field}'")]
    UnknownField { operation: String, field: String },

    #[error("{operation}: invalid value for field '{field}': {reason}")]
    InvalidField { operation: String, field: String, reason: String },

    #[error("{operation}: invalid selector '{selector}': {reason}")]
    InvalidSelector { operation: String, selector: String, reason: String },

    #[error("{operation}: input must be a JSON object")]
    InvalidInput { operation: String },

    #[error("{operation} failed: {source}")]
    Remote {
        operation: String,
        #[source]
        source: TransportError,
    },
}

impl InvokeError {
    pub(crate) fn from_bind(operation: &str, err: BindError) -> Self {
        let operation = operation.to_string();
        match err {
            BindError::MissingRequiredField { field } => {
                Self::MissingRequiredField { operation, field }
            }
            BindError::UnknownField { field } => Self::UnknownField { operation, field },
            BindError::InvalidField { field, reason } => {
                Self::InvalidField { operation, field, reason }
            }
        }
    }

    pub(crate) fn from_selector(operation: &str, err: SelectorError) -> Self {
        let operation = operation.to_string();
        match err {
            SelectorError::Malformed { raw, reason } => {
                Self::InvalidSelector { operation, selector: raw, reason }
            }
            SelectorError::Unresolved { selector, reason } => {
                Self::InvalidSelector { operation, selector, reason }
            }
        }
    }
}

/// Invocation result type
pub type InvokeResult<T> = Result<T, InvokeError>;
