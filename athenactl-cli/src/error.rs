//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invocation error: {0}")]
    Invoke(#[from] athenactl_invoke::InvokeError),

    #[error("Transport error: {0}")]
    Transport(#[from] athenactl_client::TransportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("AWS credentials not found; set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY")]
    MissingCredentials,

    #[error("General error: {0}")]
    General(String),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
