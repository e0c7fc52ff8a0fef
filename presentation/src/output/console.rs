//! Console output formatter

use crate::form::{display_value, field_label};
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use inspector_application::InvocationOutcome;
use inspector_domain::{
    ContentBlock, FieldView, ParameterSchema, SchemaResolver, SubmitError, ToolCatalog,
};

/// Formats tools and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the loaded catalog, one block per tool
    pub fn format_tools(tools: &ToolCatalog, more_available: bool) -> String {
        if tools.is_empty() {
            return format!("{}\n", "No tools available.".dimmed());
        }

        let resolver = SchemaResolver::new();
        let mut output = String::new();
        for tool in tools.all() {
            output.push_str(&format!("{}", tool.name.cyan().bold()));
            if !tool.description.is_empty() {
                output.push_str(&format!("  {}", tool.description));
            }
            output.push('\n');
            for param in &tool.parameters {
                output.push_str(&Self::parameter_line(param, &resolver));
                output.push('\n');
            }
        }
        if more_available {
            output.push_str(&format!("{}\n", "(more tools available)".dimmed()));
        }
        output
    }

    fn parameter_line(param: &ParameterSchema, resolver: &SchemaResolver) -> String {
        let required = if param.required {
            " required".yellow().to_string()
        } else {
            String::new()
        };
        let mut line = format!(
            "  {} {}{} [{}]",
            param.name.bold(),
            param.declared_type,
            required,
            resolver.resolve_control(param)
        );
        if let Some(desc) = &param.description {
            line.push_str(&format!(" {}", desc.dimmed()));
        }
        line
    }

    /// Format the current form, one line per field
    pub fn format_form(fields: &[FieldView<'_>]) -> String {
        fields
            .iter()
            .map(|f| format!("  {} = {}", field_label(f), display_value(f)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str, ok: bool) -> String {
        let line = format!("── {} ──", title);
        if ok {
            line.green().bold().to_string()
        } else {
            line.red().bold().to_string()
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_outcome(&self, outcome: &InvocationOutcome) -> String {
        let title = format!("{} {}", outcome.tool_name, outcome.id);
        let mut output = String::new();

        match &outcome.result {
            Ok(result) => {
                let title = if result.is_error {
                    format!("{} (tool error)", title)
                } else {
                    title
                };
                output.push_str(&Self::header(&title, result.is_success()));
                output.push('\n');
                for block in &result.content {
                    match block {
                        ContentBlock::Text { text } => output.push_str(text),
                        ContentBlock::Image { mime_type, .. } => {
                            output.push_str(&format!("{}", format!("<{} image>", mime_type).dimmed()))
                        }
                    }
                    if !output.ends_with('\n') {
                        output.push('\n');
                    }
                }
            }
            Err(e) => {
                output.push_str(&Self::header(&title, false));
                output.push('\n');
                output.push_str(&format!("{} {}\n", "Error:".red().bold(), e));
            }
        }

        output
    }

    fn format_submit_error(&self, error: &SubmitError, fields: &[FieldView<'_>]) -> String {
        match error {
            SubmitError::NoToolSelected => format!("{} {}\n", "Error:".red().bold(), error),
            SubmitError::Invalid { tool_name, errors } => {
                let mut output = format!(
                    "{} {}\n",
                    "Invalid arguments for".red().bold(),
                    tool_name.bold()
                );
                for err in errors {
                    output.push_str(&format!("  {} {}\n", "x".red(), err));
                }
                if !fields.is_empty() {
                    output.push_str(&format!("\n{}\n", "Form:".cyan().bold()));
                    output.push_str(&Self::format_form(fields));
                    output.push('\n');
                }
                output
            }
        }
    }
}
