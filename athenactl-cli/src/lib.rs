pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use cli::{build_cli, OutputFormat};
pub use error::{CliError, CliResult};
pub use utils::{init_tracing, ColoredOutput};
