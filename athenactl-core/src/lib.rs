pub mod bind;
pub mod catalog;
pub mod error;
pub mod selector;
pub mod types;

// Re-export commonly used types
pub use bind::{bind_fields, to_payload, BoundFields};
pub use catalog::{find_operation, OPERATIONS};
pub use error::{BindError, SelectorError};
pub use selector::{DefaultSelect, Selector};
pub use types::{ConfirmImpact, FieldKind, FieldSpec, OperationDescriptor};
