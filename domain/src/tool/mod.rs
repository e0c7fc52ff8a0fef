//! Tool domain module
//!
//! Describes the tools a user can invoke: each tool is a [`ToolDescriptor`]
//! with an ordered list of [`ParameterSchema`]s, each carrying a declared
//! [`SchemaType`]. Descriptors are collected in a [`ToolCatalog`] and a
//! completed invocation yields a [`ToolCallResult`].
//!
//! ```text
//! ┌──────────────┐    ┌────────────────┐    ┌────────────────┐
//! │ ToolCatalog  │───▶│ ToolDescriptor │───▶│ ParameterSchema│
//! │ (ordered)    │    │ (identity=name)│    │ (SchemaType)   │
//! └──────────────┘    └────────────────┘    └────────────────┘
//! ```
//!
//! These types are read-only inputs to the form engine in [`crate::form`].

pub mod entities;
pub mod schema_type;
pub mod value_objects;

pub use entities::{ParameterSchema, ToolCatalog, ToolDescriptor};
pub use schema_type::SchemaType;
pub use value_objects::{ContentBlock, ToolCallResult};
