//! Infrastructure layer for tool-inspector
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod catalog;
pub mod config;
pub mod executor;
pub mod logging;

// Re-export commonly used types
pub use catalog::{JsonFileToolCatalog, McpToolConverter, SchemaError, StaticToolCatalog};
pub use config::{
    ConfigIssue, ConfigLoader, ExecutorKind, FileConfig, FileOutputConfig, FileOutputFormat,
    Severity,
};
pub use executor::{CommandToolExecutor, EchoToolExecutor, build_executor};
pub use logging::JsonlInvocationLogger;
