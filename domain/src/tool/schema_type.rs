//! Declared parameter types

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scalar type declared by a parameter's schema.
///
/// This is a closed set: every `type` tag found in a tool's input schema maps
/// to exactly one variant, with anything unrecognized (including a missing
/// tag, `"object"` or `"array"`) collapsing to [`SchemaType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Number,
    Integer,
    String,
    Boolean,
    #[default]
    Unknown,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::String => "string",
            SchemaType::Boolean => "boolean",
            SchemaType::Unknown => "unknown",
        }
    }

    /// Map a JSON Schema `type` tag to a schema type. Total: never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "string" => SchemaType::String,
            "boolean" => SchemaType::Boolean,
            _ => SchemaType::Unknown,
        }
    }

    /// Whether values of this type must reach the executor as JSON numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, SchemaType::Number | SchemaType::Integer)
    }
}

impl FromStr for SchemaType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
