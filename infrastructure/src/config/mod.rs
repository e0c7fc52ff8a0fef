//! Configuration file loading for tool-inspector
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INSPECTOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./inspector.toml` or `./.inspector.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tool-inspector/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS, ExecutorKind, FileCatalogConfig,
    FileConfig, FileExecutorConfig, FileFormConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, Severity,
};
pub use loader::ConfigLoader;
