//! Domain layer for tool-inspector
//!
//! This crate contains the tool model and the form engine. It has no
//! dependencies on I/O, configuration or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Tool descriptors** ([`tool`]): named tools whose parameters declare a
//!   scalar [`SchemaType`].
//! - **Form engine** ([`form`]): picks an input control per parameter, keeps
//!   the user's raw drafts for the selected tool and coerces them into a
//!   [`CoercedArguments`] object on submit.

pub mod form;
pub mod tool;

// Re-export commonly used types
pub use form::{
    BooleanVocabulary, CoercedArguments, CoercedValue, CoercionError, CoercionFailure,
    ControlKind, DraftState, FieldView, FormController, FormError, FormPhase, SchemaResolver,
    SubmitError, Submission, UnknownParameterError,
};
pub use tool::{ContentBlock, ParameterSchema, SchemaType, ToolCallResult, ToolCatalog, ToolDescriptor};
