//! Tool domain entities

use super::schema_type::SchemaType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Description of an invocable tool and its declared parameters.
///
/// The `name` is the tool's identity: two descriptors with the same name are
/// the same tool as far as form state is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique, stable name of the tool (e.g., "add_numbers")
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Parameter schemas in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterSchema>,
}

/// Declared schema of a single tool parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Parameter name, unique within its tool
    pub name: String,
    /// Declared scalar type
    #[serde(default)]
    pub declared_type: SchemaType,
    /// Whether this parameter is required
    #[serde(default)]
    pub required: bool,
    /// Parameter description, shown next to the control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter. A parameter with an already-declared name
    /// replaces the earlier one in place so names stay unique.
    pub fn with_parameter(mut self, param: ParameterSchema) -> Self {
        match self.parameters.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => *existing = param,
            None => self.parameters.push(param),
        }
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterSchema> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }

    /// Whether `other` refers to the same tool identity
    pub fn same_identity(&self, other: &ToolDescriptor) -> bool {
        self.name == other.name
    }
}

impl ParameterSchema {
    pub fn new(name: impl Into<String>, declared_type: SchemaType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            required: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered set of tool descriptors, indexed by name.
///
/// Insertion order is the catalog's order and is what listings show.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool. A tool whose name is already present replaces the
    /// earlier entry, keeping its position.
    pub fn insert(&mut self, tool: ToolDescriptor) {
        match self.index.get(&tool.name) {
            Some(&pos) => self.tools[pos] = tool,
            None => {
                self.index.insert(tool.name.clone(), self.tools.len());
                self.tools.push(tool);
            }
        }
    }

    pub fn extend(&mut self, tools: impl IntoIterator<Item = ToolDescriptor>) {
        for tool in tools {
            self.insert(tool);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&pos| &self.tools[pos])
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn at(&self, pos: usize) -> Option<&ToolDescriptor> {
        self.tools.get(pos)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn clear(&mut self) {
        self.tools.clear();
        self.index.clear();
    }
}

impl FromIterator<ToolDescriptor> for ToolCatalog {
    fn from_iter<I: IntoIterator<Item = ToolDescriptor>>(iter: I) -> Self {
        let mut catalog = ToolCatalog::new();
        catalog.extend(iter);
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_descriptor() {
        let tool = ToolDescriptor::new("add", "Add two numbers")
            .with_parameter(ParameterSchema::new("a", SchemaType::Number).required())
            .with_parameter(ParameterSchema::new("b", SchemaType::Number));

        assert_eq!(tool.name, "add");
        assert_eq!(tool.parameters.len(), 2);
        assert!(tool.parameter("a").unwrap().required);
        assert!(!tool.parameter("b").unwrap().required);
        assert!(tool.parameter("c").is_none());
    }

    #[test]
    fn test_duplicate_parameter_replaces_in_place() {
        let tool = ToolDescriptor::new("t", "")
            .with_parameter(ParameterSchema::new("x", SchemaType::String))
            .with_parameter(ParameterSchema::new("y", SchemaType::String))
            .with_parameter(ParameterSchema::new("x", SchemaType::Integer));

        let names: Vec<&str> = tool.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(tool.parameter("x").unwrap().declared_type, SchemaType::Integer);
    }

    #[test]
    fn test_same_identity_is_by_name() {
        let a = ToolDescriptor::new("tool1", "First");
        let b = ToolDescriptor::new("tool1", "Changed description");
        let c = ToolDescriptor::new("tool2", "First");

        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog: ToolCatalog = ["tool1", "tool3", "tool2"]
            .into_iter()
            .map(|n| ToolDescriptor::new(n, ""))
            .collect();

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["tool1", "tool3", "tool2"]);
        assert_eq!(catalog.position("tool2"), Some(2));
        assert_eq!(catalog.at(1).unwrap().name, "tool3");
    }

    #[test]
    fn test_catalog_insert_replaces_existing() {
        let mut catalog = ToolCatalog::new();
        catalog.insert(ToolDescriptor::new("a", "old"));
        catalog.insert(ToolDescriptor::new("b", ""));
        catalog.insert(ToolDescriptor::new("a", "new"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().description, "new");
        assert_eq!(catalog.position("a"), Some(0));
    }

    #[test]
    fn test_catalog_clear() {
        let mut catalog: ToolCatalog = std::iter::once(ToolDescriptor::new("a", "")).collect();
        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.get("a").is_none());
    }
}
