//! Tool Executor port
//!
//! Defines the interface for invoking a tool with an already coerced
//! argument object.

use async_trait::async_trait;
use inspector_domain::{CoercedArguments, ToolCallResult};
use thiserror::Error;

/// Failure to obtain any result from the executor.
///
/// A tool that ran and reported an error is not an `ExecutorError`; it is a
/// [`ToolCallResult`] with `is_error` set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutorError {
    #[error("Failed to start tool backend: {0}")]
    Spawn(String),

    #[error("Tool '{tool}' timed out after {seconds}s")]
    Timeout { tool: String, seconds: u64 },

    #[error("I/O error talking to tool backend: {0}")]
    Io(String),

    #[error("Invalid response from tool backend: {0}")]
    Protocol(String),
}

/// Port for tool execution
///
/// This port defines how the application layer hands a validated argument
/// object to whatever actually runs the tool. Implementations (adapters)
/// live in the infrastructure layer.
///
/// Arguments only ever contain coerced values: numeric parameters arrive as
/// JSON numbers, boolean parameters as JSON booleans.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Invoke `tool_name` with `arguments`
    async fn call_tool(
        &self,
        tool_name: &str,
        arguments: &CoercedArguments,
    ) -> Result<ToolCallResult, ExecutorError>;
}
