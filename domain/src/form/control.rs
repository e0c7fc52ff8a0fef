//! Schema-to-control resolution and coercion
//!
//! Every [`SchemaType`] maps to exactly one [`ControlKind`] and one coercion
//! rule. Both mappings live in [`SchemaResolver`]; adding a schema type means
//! extending the two `match`es here and nowhere else.
//!
//! | Declared type | Control | Coerced to |
//! |---------------|---------|------------|
//! | `number` | `numeric-input` | finite `f64` |
//! | `integer` | `numeric-input` | `i64`, fractions rejected |
//! | `boolean` | `boolean-input` | `bool` from a fixed vocabulary |
//! | `string` | `text-input` | the raw text |
//! | `unknown` | `text-input` | the raw text |

use super::error::{CoercionError, CoercionFailure};
use super::value::CoercedValue;
use crate::tool::{ParameterSchema, SchemaType};
use serde::{Deserialize, Serialize};

/// Kind of input control used to edit a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    NumericInput,
    BooleanInput,
    TextInput,
}

impl ControlKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::NumericInput => "numeric-input",
            ControlKind::BooleanInput => "boolean-input",
            ControlKind::TextInput => "text-input",
        }
    }
}

impl std::fmt::Display for ControlKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Integers up to this magnitude (2^53) have an exact `f64` form
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

const DEFAULT_TRUTHY: &[&str] = &["true", "yes", "on", "1"];
const DEFAULT_FALSY: &[&str] = &["false", "no", "off", "0"];

/// Accepted spellings for boolean drafts, matched case-insensitively after
/// trimming. A word listed as both truthy and falsy is ambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanVocabulary {
    truthy: Vec<String>,
    falsy: Vec<String>,
}

impl Default for BooleanVocabulary {
    fn default() -> Self {
        Self {
            truthy: DEFAULT_TRUTHY.iter().map(|s| s.to_string()).collect(),
            falsy: DEFAULT_FALSY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BooleanVocabulary {
    /// Default vocabulary extended with extra spellings
    pub fn with_extra<T, F>(truthy: T, falsy: F) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let mut vocab = Self::default();
        vocab
            .truthy
            .extend(truthy.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        vocab
            .falsy
            .extend(falsy.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        vocab
    }

    pub fn interpret(&self, raw: &str) -> Option<bool> {
        let word = raw.trim().to_lowercase();
        let truthy = self.truthy.contains(&word);
        let falsy = self.falsy.contains(&word);
        match (truthy, falsy) {
            (true, false) => Some(true),
            (false, true) => Some(false),
            _ => None,
        }
    }
}

/// Stateless mapping from parameter schemas to controls and coerced values
#[derive(Debug, Clone, Default)]
pub struct SchemaResolver {
    booleans: BooleanVocabulary,
}

impl SchemaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_booleans(booleans: BooleanVocabulary) -> Self {
        Self { booleans }
    }

    pub fn booleans(&self) -> &BooleanVocabulary {
        &self.booleans
    }

    pub fn resolve_control(&self, schema: &ParameterSchema) -> ControlKind {
        control_for(schema.declared_type)
    }

    /// Coerce a raw draft to the parameter's declared type.
    ///
    /// Number, integer and boolean drafts are trimmed first and fail with
    /// [`CoercionFailure::Missing`] when blank. String and unknown drafts are
    /// passed through untouched, including the empty string.
    pub fn coerce(&self, schema: &ParameterSchema, raw: &str) -> Result<CoercedValue, CoercionError> {
        let fail = |reason| CoercionError::new(&schema.name, schema.declared_type, raw, reason);

        match schema.declared_type {
            SchemaType::Number => parse_number(raw).map(CoercedValue::Number).map_err(fail),
            SchemaType::Integer => parse_integer(raw).map(CoercedValue::Integer).map_err(fail),
            SchemaType::Boolean => {
                if raw.trim().is_empty() {
                    return Err(fail(CoercionFailure::Missing));
                }
                self.booleans
                    .interpret(raw)
                    .map(CoercedValue::Boolean)
                    .ok_or_else(|| fail(CoercionFailure::AmbiguousBoolean))
            }
            SchemaType::String | SchemaType::Unknown => Ok(CoercedValue::Text(raw.to_string())),
        }
    }
}

fn control_for(declared_type: SchemaType) -> ControlKind {
    match declared_type {
        SchemaType::Number | SchemaType::Integer => ControlKind::NumericInput,
        SchemaType::Boolean => ControlKind::BooleanInput,
        SchemaType::String | SchemaType::Unknown => ControlKind::TextInput,
    }
}

fn parse_number(raw: &str) -> Result<f64, CoercionFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoercionFailure::Missing);
    }
    let n: f64 = trimmed.parse().map_err(|_| CoercionFailure::NotANumber)?;
    if !n.is_finite() {
        return Err(CoercionFailure::NotFinite);
    }
    Ok(n)
}

fn parse_integer(raw: &str) -> Result<i64, CoercionFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoercionFailure::Missing);
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Ok(i);
    }

    // Integral spellings such as "42.0" or "1e3" are accepted; anything with
    // a fractional part is not. Past 2^53 the float no longer holds the
    // digits that were typed, so those values are out of range here.
    let n: f64 = trimmed.parse().map_err(|_| CoercionFailure::NotAnInteger)?;
    if !n.is_finite() {
        return Err(CoercionFailure::NotFinite);
    }
    if n.fract() != 0.0 {
        return Err(CoercionFailure::Fractional);
    }
    if n.abs() > MAX_EXACT_FLOAT_INT {
        return Err(CoercionFailure::OutOfRange);
    }
    Ok(n as i64)
}

/// Resolve a control with the default resolver
pub fn resolve_control(schema: &ParameterSchema) -> ControlKind {
    control_for(schema.declared_type)
}

/// Coerce a raw draft with the default boolean vocabulary
pub fn coerce(schema: &ParameterSchema, raw: &str) -> Result<CoercedValue, CoercionError> {
    SchemaResolver::default().coerce(schema, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(ty: SchemaType) -> ParameterSchema {
        ParameterSchema::new("p", ty)
    }

    #[test]
    fn test_resolve_control() {
        assert_eq!(resolve_control(&param(SchemaType::Number)), ControlKind::NumericInput);
        assert_eq!(resolve_control(&param(SchemaType::Integer)), ControlKind::NumericInput);
        assert_eq!(resolve_control(&param(SchemaType::Boolean)), ControlKind::BooleanInput);
        assert_eq!(resolve_control(&param(SchemaType::String)), ControlKind::TextInput);
        assert_eq!(resolve_control(&param(SchemaType::Unknown)), ControlKind::TextInput);
    }

    #[test]
    fn test_control_kind_names() {
        assert_eq!(ControlKind::NumericInput.to_string(), "numeric-input");
        assert_eq!(
            serde_json::to_string(&ControlKind::BooleanInput).unwrap(),
            "\"boolean-input\""
        );
    }

    #[test]
    fn test_coerce_number() {
        let p = param(SchemaType::Number);
        assert_eq!(coerce(&p, "42").unwrap(), CoercedValue::Number(42.0));
        assert_eq!(coerce(&p, " -3.5 ").unwrap(), CoercedValue::Number(-3.5));
        assert_eq!(coerce(&p, "1e3").unwrap(), CoercedValue::Number(1000.0));
    }

    #[test]
    fn test_coerce_number_failures() {
        let p = param(SchemaType::Number);
        assert_eq!(coerce(&p, "").unwrap_err().reason, CoercionFailure::Missing);
        assert_eq!(coerce(&p, "   ").unwrap_err().reason, CoercionFailure::Missing);
        assert_eq!(coerce(&p, "abc").unwrap_err().reason, CoercionFailure::NotANumber);
        assert_eq!(coerce(&p, "NaN").unwrap_err().reason, CoercionFailure::NotFinite);
        assert_eq!(coerce(&p, "inf").unwrap_err().reason, CoercionFailure::NotFinite);
    }

    #[test]
    fn test_coerce_integer() {
        let p = param(SchemaType::Integer);
        assert_eq!(coerce(&p, "42").unwrap(), CoercedValue::Integer(42));
        assert_eq!(coerce(&p, "-7").unwrap(), CoercedValue::Integer(-7));
        assert_eq!(coerce(&p, "42.0").unwrap(), CoercedValue::Integer(42));
        assert_eq!(coerce(&p, "1e3").unwrap(), CoercedValue::Integer(1000));
    }

    #[test]
    fn test_coerce_integer_failures() {
        let p = param(SchemaType::Integer);
        assert_eq!(coerce(&p, "").unwrap_err().reason, CoercionFailure::Missing);
        assert_eq!(coerce(&p, "abc").unwrap_err().reason, CoercionFailure::NotAnInteger);
        assert_eq!(coerce(&p, "4.2").unwrap_err().reason, CoercionFailure::Fractional);
        assert_eq!(
            coerce(&p, "99999999999999999999").unwrap_err().reason,
            CoercionFailure::OutOfRange
        );
        // Neither may round to a neighbouring integer
        assert_eq!(
            coerce(&p, "9007199254740993.0").unwrap_err().reason,
            CoercionFailure::OutOfRange
        );
        assert_eq!(
            coerce(&p, "-9223372036854775809").unwrap_err().reason,
            CoercionFailure::OutOfRange
        );
    }

    #[test]
    fn test_coerce_integer_keeps_exact_values() {
        let p = param(SchemaType::Integer);
        assert_eq!(
            coerce(&p, "9007199254740993").unwrap(),
            CoercedValue::Integer(9_007_199_254_740_993)
        );
        assert_eq!(
            coerce(&p, "-9223372036854775808").unwrap(),
            CoercedValue::Integer(i64::MIN)
        );
        assert_eq!(
            coerce(&p, "9007199254740992.0").unwrap(),
            CoercedValue::Integer(9_007_199_254_740_992)
        );
    }

    #[test]
    fn test_coercion_error_carries_context() {
        let p = ParameterSchema::new("count", SchemaType::Integer);
        let err = coerce(&p, "abc").unwrap_err();
        assert_eq!(err.parameter, "count");
        assert_eq!(err.declared_type, SchemaType::Integer);
        assert_eq!(err.raw, "abc");
    }

    #[test]
    fn test_coerce_boolean() {
        let p = param(SchemaType::Boolean);
        for word in ["true", "TRUE", " yes ", "on", "1"] {
            assert_eq!(coerce(&p, word).unwrap(), CoercedValue::Boolean(true), "{word}");
        }
        for word in ["false", "No", "off", "0"] {
            assert_eq!(coerce(&p, word).unwrap(), CoercedValue::Boolean(false), "{word}");
        }
        assert_eq!(coerce(&p, "maybe").unwrap_err().reason, CoercionFailure::AmbiguousBoolean);
        assert_eq!(coerce(&p, "").unwrap_err().reason, CoercionFailure::Missing);
    }

    #[test]
    fn test_boolean_vocabulary_extra_words() {
        let resolver =
            SchemaResolver::with_booleans(BooleanVocabulary::with_extra(["Ja"], ["nein"]));
        let p = param(SchemaType::Boolean);
        assert_eq!(resolver.coerce(&p, "ja").unwrap(), CoercedValue::Boolean(true));
        assert_eq!(resolver.coerce(&p, "NEIN").unwrap(), CoercedValue::Boolean(false));
    }

    #[test]
    fn test_boolean_word_in_both_lists_is_ambiguous() {
        let vocab = BooleanVocabulary::with_extra(["maybe"], ["maybe"]);
        assert_eq!(vocab.interpret("maybe"), None);
    }

    #[test]
    fn test_coerce_string_is_identity() {
        let p = param(SchemaType::String);
        assert_eq!(coerce(&p, "42").unwrap(), CoercedValue::Text("42".into()));
        assert_eq!(coerce(&p, "").unwrap(), CoercedValue::Text(String::new()));
        assert_eq!(coerce(&p, "  padded ").unwrap(), CoercedValue::Text("  padded ".into()));
        assert_eq!(
            coerce(&param(SchemaType::Unknown), "{}").unwrap(),
            CoercedValue::Text("{}".into())
        );
    }
}
