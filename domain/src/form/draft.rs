//! Per-tool draft values

use std::collections::HashMap;

/// Raw, uncoerced values the user has typed for one tool's parameters.
///
/// A draft is bound to a single tool name for its whole life. An empty raw
/// value is the same as never having typed anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    tool_name: String,
    values: HashMap<String, String>,
}

impl DraftState {
    pub fn for_tool(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            values: HashMap::new(),
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Store a raw value verbatim; an empty value unsets the parameter.
    pub fn set(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        let name = name.into();
        let raw = raw.into();
        if raw.is_empty() {
            self.values.remove(&name);
        } else {
            self.values.insert(name, raw);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Raw value as rendered: unset parameters show as ""
    pub fn raw(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut draft = DraftState::for_tool("tool1");
        draft.set("num", "42");
        assert_eq!(draft.tool_name(), "tool1");
        assert_eq!(draft.get("num"), Some("42"));
        assert_eq!(draft.raw("num"), "42");
        assert!(draft.is_set("num"));
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let mut draft = DraftState::for_tool("t");
        draft.set("num", " 4.20 ");
        assert_eq!(draft.get("num"), Some(" 4.20 "));
    }

    #[test]
    fn test_empty_value_unsets() {
        let mut draft = DraftState::for_tool("t");
        draft.set("num", "42");
        draft.set("num", "");
        assert!(!draft.is_set("num"));
        assert_eq!(draft.raw("num"), "");
        assert!(draft.is_empty());
    }

    #[test]
    fn test_unset_parameter_renders_empty() {
        let draft = DraftState::for_tool("t");
        assert_eq!(draft.raw("anything"), "");
        assert_eq!(draft.get("anything"), None);
    }
}
