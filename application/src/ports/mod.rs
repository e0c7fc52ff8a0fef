//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod invocation_logger;
pub mod progress;
pub mod tool_catalog;
pub mod tool_executor;
