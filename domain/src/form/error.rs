//! Form error types

use crate::tool::SchemaType;
use thiserror::Error;

/// Why a raw draft could not be interpreted as its declared type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionFailure {
    #[error("a value is required")]
    Missing,

    #[error("not a valid number")]
    NotANumber,

    #[error("number is not finite")]
    NotFinite,

    #[error("not a valid integer")]
    NotAnInteger,

    #[error("fractional value where an integer is expected")]
    Fractional,

    #[error("integer out of range")]
    OutOfRange,

    #[error("not a recognized true/false value")]
    AmbiguousBoolean,
}

/// A raw draft that failed coercion to its parameter's declared type
#[derive(Error, Debug, Clone, PartialEq)]
#[error("parameter '{parameter}' ({declared_type}): {reason}, got {raw:?}")]
pub struct CoercionError {
    pub parameter: String,
    pub declared_type: SchemaType,
    pub raw: String,
    pub reason: CoercionFailure,
}

impl CoercionError {
    pub fn new(
        parameter: impl Into<String>,
        declared_type: SchemaType,
        raw: impl Into<String>,
        reason: CoercionFailure,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            declared_type,
            raw: raw.into(),
            reason,
        }
    }
}

/// A write to a parameter the active tool does not declare
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("tool '{tool}' has no parameter '{parameter}'")]
pub struct UnknownParameterError {
    pub tool: String,
    pub parameter: String,
}

/// Errors from editing operations on the form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("No tool selected")]
    NoToolSelected,

    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameterError),
}

/// Errors from submitting the form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("No tool selected")]
    NoToolSelected,

    /// Every parameter that failed coercion, in declaration order
    #[error("{} invalid argument(s) for tool '{tool_name}'", errors.len())]
    Invalid {
        tool_name: String,
        errors: Vec<CoercionError>,
    },
}

impl SubmitError {
    /// The per-parameter failures, empty when no tool was selected
    pub fn coercion_errors(&self) -> &[CoercionError] {
        match self {
            SubmitError::NoToolSelected => &[],
            SubmitError::Invalid { errors, .. } => errors,
        }
    }
}
