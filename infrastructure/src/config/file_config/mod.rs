//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod executor;
mod form;
mod logging;
mod output;

pub use catalog::{DEFAULT_PAGE_SIZE, FileCatalogConfig};
pub use executor::{DEFAULT_TIMEOUT_SECS, ExecutorKind, FileExecutorConfig};
pub use form::FileFormConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use serde::{Deserialize, Serialize};

/// Severity of a configuration issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem detected in an otherwise loadable configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field (e.g. "executor.command")
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where tools come from
    pub catalog: FileCatalogConfig,
    /// How tools are run
    pub executor: FileExecutorConfig,
    /// Form coercion settings
    pub form: FileFormConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log sinks
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.catalog.page_size == 0 {
            issues.push(ConfigIssue::error(
                "catalog.page_size",
                "page_size must be at least 1",
            ));
        }

        if self.executor.kind == ExecutorKind::Command && self.executor.command.is_empty() {
            issues.push(ConfigIssue::error(
                "executor.command",
                "the command executor needs a non-empty command",
            ));
        }
        if self.executor.kind == ExecutorKind::Echo && !self.executor.command.is_empty() {
            issues.push(ConfigIssue::warning(
                "executor.command",
                "command is set but executor.kind is \"echo\"; the command is not used",
            ));
        }
        if self.executor.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "executor.timeout_secs",
                format!("0 is not a usable timeout, using {DEFAULT_TIMEOUT_SECS}s"),
            ));
        }

        for word in self.form.conflicting_words() {
            issues.push(ConfigIssue::warning(
                "form.truthy",
                format!("'{word}' is listed as both truthy and falsy and will be rejected"),
            ));
        }

        issues
    }

    /// Whether any issue prevents starting
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[catalog]
path = "tools.json"
page_size = 10

[executor]
kind = "command"
command = ["python3", "run.py"]
timeout_secs = 5

[form]
truthy = ["ja"]
strict_fields = true

[output]
format = "text"
color = false

[logging]
invocation_log = "inv.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some(std::path::Path::new("tools.json")));
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.executor.kind, ExecutorKind::Command);
        assert_eq!(config.executor.command, vec!["python3", "run.py"]);
        assert_eq!(config.executor.timeout_secs, 5);
        assert_eq!(config.form.truthy, vec!["ja"]);
        assert_eq!(config.form.strict_fields, Some(true));
        assert_eq!(config.output.format, Some(FileOutputFormat::Text));
        assert!(!config.output.color);
        assert!(config.logging.invocation_log.is_some());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[executor]
timeout_secs = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.executor.timeout_secs, 3);
        // Defaults should apply
        assert_eq!(config.executor.kind, ExecutorKind::Echo);
        assert_eq!(config.catalog.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_command_without_argv() {
        let mut config = FileConfig::default();
        config.executor.kind = ExecutorKind::Command;

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "executor.command");
        assert!(FileConfig::has_errors(&issues));
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.catalog.page_size = 0;
        config.executor.timeout_secs = 0;
        config.executor.command = vec!["unused".to_string()];
        config.form.truthy = vec!["x".to_string()];
        config.form.falsy = vec!["X".to_string()];

        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "catalog.page_size",
                "executor.command",
                "executor.timeout_secs",
                "form.truthy"
            ]
        );
    }
}
