//! Form state controller
//!
//! [`FormController`] owns the draft values for the currently selected tool.
//!
//! ```text
//!            select_tool(A)           update_field
//!   Idle ─────────────────▶ Editing ◀────────────┐
//!                            │  ▲ └──────────────┘
//!                     submit │  │ (success or failure)
//!                            ▼  │
//!                          Submitting
//!
//!   any state ── select_tool(B ≠ active) ──▶ Editing (drafts cleared)
//! ```
//!
//! Reselecting the active tool keeps its drafts. Submitting never clears
//! drafts; only a change of tool identity does.

use super::control::{BooleanVocabulary, ControlKind, SchemaResolver};
use super::draft::DraftState;
use super::error::{FormError, SubmitError, UnknownParameterError};
use super::value::CoercedArguments;
use crate::tool::{SchemaType, ToolDescriptor};

/// Lifecycle phase of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// No tool selected yet
    #[default]
    Idle,
    /// A tool is selected; zero or more drafts are set
    Editing,
    /// Drafts are being coerced. Only observable during `submit`.
    Submitting,
}

/// Everything the presentation layer needs to draw one parameter's control.
///
/// Edits go back through [`FormController::update_field`] using `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub declared_type: SchemaType,
    pub required: bool,
    pub control: ControlKind,
    /// Current raw draft, "" when unset
    pub raw: &'a str,
    /// Spellings the resolver accepts for boolean drafts
    pub booleans: &'a BooleanVocabulary,
}

/// A validated argument object ready for the executor
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub tool_name: String,
    pub arguments: CoercedArguments,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    resolver: SchemaResolver,
    active: Option<ToolDescriptor>,
    drafts: DraftState,
    phase: FormPhase,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: SchemaResolver) -> Self {
        Self {
            resolver,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn active_tool(&self) -> Option<&ToolDescriptor> {
        self.active.as_ref()
    }

    pub fn active_tool_name(&self) -> Option<&str> {
        self.active.as_ref().map(|t| t.name.as_str())
    }

    pub fn drafts(&self) -> &DraftState {
        &self.drafts
    }

    /// Make `descriptor` the active tool.
    ///
    /// Returns `true` when the identity changed and drafts were cleared,
    /// `false` when the same tool was reselected and drafts were kept.
    pub fn select_tool(&mut self, descriptor: &ToolDescriptor) -> bool {
        if self
            .active
            .as_ref()
            .is_some_and(|active| active.same_identity(descriptor))
        {
            return false;
        }

        // Descriptor and drafts are swapped together so no draft of the
        // previous tool is ever paired with the new one.
        self.drafts = DraftState::for_tool(&descriptor.name);
        self.active = Some(descriptor.clone());
        self.phase = FormPhase::Editing;
        true
    }

    /// Store a raw value for one of the active tool's parameters.
    ///
    /// The value is kept verbatim; coercion only happens on submit.
    pub fn update_field(&mut self, name: &str, raw: impl Into<String>) -> Result<(), FormError> {
        let active = self.active.as_ref().ok_or(FormError::NoToolSelected)?;
        if !active.has_parameter(name) {
            return Err(UnknownParameterError {
                tool: active.name.clone(),
                parameter: name.to_string(),
            }
            .into());
        }
        self.drafts.set(name, raw);
        Ok(())
    }

    /// Current raw value of a parameter, "" when unset
    pub fn raw_value(&self, name: &str) -> &str {
        self.drafts.raw(name)
    }

    /// Control descriptions for every parameter of the active tool, in
    /// declaration order. Empty when no tool is selected.
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        let Some(active) = &self.active else {
            return Vec::new();
        };
        active
            .parameters
            .iter()
            .map(|p| FieldView {
                name: &p.name,
                description: p.description.as_deref(),
                declared_type: p.declared_type,
                required: p.required,
                control: self.resolver.resolve_control(p),
                raw: self.drafts.raw(&p.name),
                booleans: self.resolver.booleans(),
            })
            .collect()
    }

    /// Coerce every draft of the active tool into an argument object.
    ///
    /// Unset optional parameters are omitted. Unset required parameters are
    /// coerced from "", which fails for number, integer and boolean and
    /// yields an empty string otherwise. All failures are collected; if any
    /// occur no arguments are produced. Drafts are left untouched either way.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        let active = self.active.as_ref().ok_or(SubmitError::NoToolSelected)?;
        self.phase = FormPhase::Submitting;

        let mut arguments = CoercedArguments::new();
        let mut errors = Vec::new();
        for param in &active.parameters {
            let raw = match self.drafts.get(&param.name) {
                Some(raw) => raw,
                None if param.required => "",
                None => continue,
            };
            match self.resolver.coerce(param, raw) {
                Ok(value) => arguments.insert(&param.name, value),
                Err(e) => errors.push(e),
            }
        }

        let tool_name = active.name.clone();
        self.phase = FormPhase::Editing;

        if errors.is_empty() {
            Ok(Submission {
                tool_name,
                arguments,
            })
        } else {
            Err(SubmitError::Invalid { tool_name, errors })
        }
    }
}
