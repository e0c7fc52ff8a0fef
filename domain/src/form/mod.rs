//! Form engine: turns a tool's parameter schemas into editable controls and
//! the user's raw drafts into a typed argument object.
//!
//! # Overview
//!
//! ```text
//! select_tool ─▶ FormController ─▶ fields() ─▶ (presentation draws controls)
//!                    ▲   │                          │
//!      update_field ─┘   │ submit()                 │ edits
//!                        ▼                          │
//!                 SchemaResolver::coerce ◀──────────┘
//!                        │
//!                        ▼
//!                   Submission { tool_name, CoercedArguments }
//! ```
//!
//! - [`SchemaResolver`] is stateless: schema type → [`ControlKind`] and
//!   raw text → [`CoercedValue`].
//! - [`FormController`] holds the [`DraftState`] of the one selected tool and
//!   clears it whenever a tool with a different name is selected.
//!
//! Drafts are stored exactly as typed. Numeric parameters only become
//! numbers at submit time, and an unset numeric parameter is never turned
//! into `0`.

pub mod control;
pub mod controller;
pub mod draft;
pub mod error;
pub mod value;

pub use control::{BooleanVocabulary, ControlKind, SchemaResolver, coerce, resolve_control};
pub use controller::{FieldView, FormController, FormPhase, Submission};
pub use draft::DraftState;
pub use error::{CoercionError, CoercionFailure, FormError, SubmitError, UnknownParameterError};
pub use value::{CoercedArguments, CoercedValue};
