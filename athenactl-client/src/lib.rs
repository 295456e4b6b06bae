pub mod error;
pub mod mock;
pub mod sigv4;
pub mod transport;

// Re-export commonly used types
pub use error::TransportError;
pub use mock::{MockTransport, RecordedCall};
pub use sigv4::SigV4Transport;
pub use transport::AthenaTransport;

// Credentials are part of the public transport construction API
pub use aws_credential_types::Credentials;
