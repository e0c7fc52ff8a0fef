//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use inspector_application::InvocationOutcome;
use inspector_domain::{FieldView, SubmitError};
use serde_json::json;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &InvocationOutcome) -> String {
        let value = match &outcome.result {
            Ok(result) => json!({
                "id": outcome.id.0,
                "tool": outcome.tool_name,
                "arguments": outcome.arguments,
                "result": result,
            }),
            Err(e) => json!({
                "id": outcome.id.0,
                "tool": outcome.tool_name,
                "arguments": outcome.arguments,
                "error": e.to_string(),
            }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_submit_error(&self, error: &SubmitError, _fields: &[FieldView<'_>]) -> String {
        let value = match error {
            SubmitError::NoToolSelected => json!({ "error": error.to_string() }),
            SubmitError::Invalid { tool_name, errors } => json!({
                "tool": tool_name,
                "errors": errors
                    .iter()
                    .map(|e| json!({
                        "parameter": e.parameter,
                        "type": e.declared_type,
                        "raw": e.raw,
                        "reason": e.reason.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            }),
        };
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
