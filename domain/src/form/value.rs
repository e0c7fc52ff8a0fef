//! Coerced values and the argument object handed to an executor

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A draft value after coercion to its declared type
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    /// Finite floating-point value
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl CoercedValue {
    /// Convert to JSON. Numeric variants always become JSON numbers.
    pub fn to_json(&self) -> Value {
        match self {
            // Coercion rejects non-finite values, so from_f64 only fails on
            // values that never reach here.
            CoercedValue::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            CoercedValue::Integer(i) => Value::Number((*i).into()),
            CoercedValue::Boolean(b) => Value::Bool(*b),
            CoercedValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<CoercedValue> for Value {
    fn from(value: CoercedValue) -> Self {
        match value {
            CoercedValue::Text(s) => Value::String(s),
            other => other.to_json(),
        }
    }
}

/// Argument object for one tool invocation.
///
/// Entries appear in the tool's parameter declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoercedArguments(Map<String, Value>);

impl CoercedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: CoercedValue) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<CoercedArguments> for Value {
    fn from(args: CoercedArguments) -> Self {
        Value::Object(args.0)
    }
}
