//! CLI command definitions

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for tool lists and invocation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, optionally colored
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// CLI arguments for tool-inspector
#[derive(Parser, Debug)]
#[command(name = "tool-inspector")]
#[command(author, version, about = "Fill in tool parameters from their schema and invoke the tool")]
#[command(long_about = r#"
tool-inspector reads a catalog of tools, each declaring typed parameters, and
builds a form for the selected tool. Raw text entered for each parameter is
coerced to its declared type (number, integer, boolean, string) before the
tool is invoked. Invalid input is reported per parameter and never reaches
the tool.

Configuration files are loaded from (in priority order):
1. INSPECTOR_* environment variables
2. --config <path>     Explicit config file
3. ./inspector.toml    Project-level config
4. ~/.config/tool-inspector/config.toml   Global config

Example:
  tool-inspector --tools tools.json --list
  tool-inspector --tools tools.json add -a a=1.5 -a b=2
  tool-inspector --tools tools.json --tui
"#)]
pub struct Cli {
    /// Tool to invoke (not used with --list or --tui)
    pub tool: Option<String>,

    /// Parameter value as NAME=VALUE (can be specified multiple times)
    #[arg(short = 'a', long = "arg", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub args: Vec<(String, String)>,

    /// Tool catalog JSON file (overrides catalog.path)
    #[arg(short, long, value_name = "PATH")]
    pub tools: Option<PathBuf>,

    /// List the available tools and exit
    #[arg(short, long, conflicts_with = "tool")]
    pub list: bool,

    /// Start the interactive terminal UI
    #[arg(long, conflicts_with_all = ["tool", "list"])]
    pub tui: bool,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Parse `NAME=VALUE`. The value may be empty, which leaves the parameter unset.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
