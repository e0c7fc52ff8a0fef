//! Output formatter trait

use inspector_application::InvocationOutcome;
use inspector_domain::{FieldView, SubmitError};

/// Trait for formatting what a CLI invocation produced
pub trait OutputFormatter {
    /// Format the outcome of a tool invocation
    fn format_outcome(&self, outcome: &InvocationOutcome) -> String;

    /// Format a rejected submission, listing every invalid parameter.
    /// `fields` is the form as it was submitted.
    fn format_submit_error(&self, error: &SubmitError, fields: &[FieldView<'_>]) -> String;
}
