//! Command implementations

pub mod describe;
pub mod invoke;
pub mod operations;

pub use describe::DescribeCommand;
pub use invoke::InvokeCommand;
pub use operations::OperationsCommand;
