//! Tool catalog adapters
//!
//! Implementations of [`ToolCatalogPort`](inspector_application::ToolCatalogPort):
//! - [`JsonFileToolCatalog`]: MCP tool list stored in a JSON file
//! - [`StaticToolCatalog`]: tools supplied in memory
//!
//! [`McpToolConverter`] handles the JSON ↔ descriptor conversion for both.

mod json_file;
mod schema;

pub use json_file::{JsonFileToolCatalog, StaticToolCatalog};
pub use schema::{McpToolConverter, SchemaError};
