//! MCP tool JSON conversion.
//!
//! Converts between MCP-style tool objects and [`ToolDescriptor`]:
//!
//! ```json
//! {
//!   "name": "add",
//!   "description": "Add two numbers",
//!   "inputSchema": {
//!     "type": "object",
//!     "properties": { "a": { "type": "number" }, "b": { "type": "integer" } },
//!     "required": ["a"]
//!   }
//! }
//! ```
//!
//! Property order is kept. A property's `type` tag maps through
//! [`SchemaType::from_tag`]; a type array such as `["integer", "null"]` uses
//! its first non-null entry, and a missing tag becomes `unknown`.

use inspector_domain::{ParameterSchema, SchemaType, ToolDescriptor};
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Why a JSON value could not be read as a tool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("tool entry is not a JSON object")]
    NotAnObject,

    #[error("tool entry has no name")]
    MissingName,

    #[error("inputSchema of '{0}' is not an object")]
    InvalidInputSchema(String),

    #[error("properties of '{0}' is not an object")]
    InvalidProperties(String),

    #[error("expected a tool array or an object with a \"tools\" array")]
    NotAToolList,
}

/// Converter between MCP tool JSON and domain descriptors
#[derive(Debug, Clone, Copy, Default)]
pub struct McpToolConverter;

impl McpToolConverter {
    /// Read one MCP tool object
    pub fn parse_tool(&self, value: &Value) -> Result<ToolDescriptor, SchemaError> {
        let obj = value.as_object().ok_or(SchemaError::NotAnObject)?;
        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .ok_or(SchemaError::MissingName)?;
        let description = obj
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let mut tool = ToolDescriptor::new(name, description);

        let schema = match obj.get("inputSchema").or_else(|| obj.get("input_schema")) {
            None | Some(Value::Null) => return Ok(tool),
            Some(Value::Object(schema)) => schema,
            Some(_) => return Err(SchemaError::InvalidInputSchema(name.to_string())),
        };

        let required: Vec<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let properties = match schema.get("properties") {
            None | Some(Value::Null) => return Ok(tool),
            Some(Value::Object(props)) => props,
            Some(_) => return Err(SchemaError::InvalidProperties(name.to_string())),
        };

        for (param_name, prop) in properties {
            let mut param = ParameterSchema::new(param_name, declared_type(prop));
            if required.contains(&param_name.as_str()) {
                param = param.required();
            }
            if let Some(desc) = prop.get("description").and_then(Value::as_str) {
                param = param.with_description(desc);
            }
            tool = tool.with_parameter(param);
        }

        Ok(tool)
    }

    /// Read a tool list: either a bare array or a `tools/list` result object
    pub fn parse_tool_list(&self, value: &Value) -> Result<Vec<Value>, SchemaError> {
        match value {
            Value::Array(items) => Ok(items.clone()),
            Value::Object(obj) => obj
                .get("tools")
                .and_then(Value::as_array)
                .cloned()
                .ok_or(SchemaError::NotAToolList),
            _ => Err(SchemaError::NotAToolList),
        }
    }

    /// Convert a descriptor back to MCP tool JSON
    pub fn tool_to_schema(&self, tool: &ToolDescriptor) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = Map::new();
            if param.declared_type != SchemaType::Unknown {
                prop.insert("type".to_string(), json!(param.declared_type.as_str()));
            }
            if let Some(desc) = &param.description {
                prop.insert("description".to_string(), json!(desc));
            }
            properties.insert(param.name.clone(), Value::Object(prop));

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "description": tool.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

fn declared_type(prop: &Value) -> SchemaType {
    match prop.get("type") {
        Some(Value::String(tag)) => SchemaType::from_tag(tag),
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null")
            .map(SchemaType::from_tag)
            .unwrap_or_default(),
        _ => SchemaType::Unknown,
    }
}
