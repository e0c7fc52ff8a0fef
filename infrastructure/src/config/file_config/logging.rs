//! Logging configuration from TOML (`[logging]` section)
//!
//! ```toml
//! [logging]
//! file = "~/.local/state/tool-inspector/inspector.log"
//! invocation_log = "invocations.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write tracing output to this file instead of stderr
    pub file: Option<PathBuf>,
    /// JSONL file recording submissions and results
    pub invocation_log: Option<PathBuf>,
}
