use thiserror::Error;

/// Field binding failures, raised before any remote call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("required field '{field}' is missing")]
    MissingRequiredField { field: String },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

/// Output-selector failures, at parse time or when projecting a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("malformed selector '{raw}': {reason}")]
    Malformed { raw: String, reason: String },

    #[error("selector '{selector}' cannot be resolved: {reason}")]
    Unresolved { selector: String, reason: String },
}
