//! Application layer for tool-inspector
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{SessionConfig, UnknownFieldPolicy};
pub use ports::{
    invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger},
    progress::{InvocationProgressNotifier, NoProgress},
    tool_catalog::{CatalogError, ToolCatalogPort, ToolPage},
    tool_executor::{ExecutorError, ToolExecutorPort},
};
pub use use_cases::invoke_tool::{
    InvocationId, InvocationOutcome, InvokeToolUseCase, PendingInvocation,
};
pub use use_cases::tools_session::{SessionError, ToolsSession};
