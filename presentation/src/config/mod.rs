//! Presentation-level configuration

use crate::cli::commands::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when the command line does not pick one
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// The command-line choice wins over the configured format
    pub fn effective_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.unwrap_or(self.format)
    }

    /// Turn off colored output globally when disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let config = OutputConfig {
            format: OutputFormat::Json,
            color: true,
        };
        assert_eq!(config.effective_format(None), OutputFormat::Json);
        assert_eq!(
            config.effective_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
    }
}
