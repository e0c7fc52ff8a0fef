//! Presentation layer for tool-inspector
//!
//! This crate contains CLI definitions, form rendering, output formatters,
//! progress reporters, and the interactive terminal UI.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::OutputConfig;
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter, formatter_for};
pub use progress::reporter::ProgressReporter;
pub use tui::TuiApp;
