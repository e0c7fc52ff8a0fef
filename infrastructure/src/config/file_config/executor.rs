//! Executor configuration from TOML (`[executor]` section)
//!
//! ```toml
//! [executor]
//! kind = "command"
//! command = ["python3", "tools/run.py"]
//! timeout_secs = 30
//! ```
//!
//! The command executor appends the tool name as the final argument and
//! writes the arguments object to the child's stdin as JSON.

use serde::{Deserialize, Serialize};

/// Default timeout for a single tool invocation (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which executor adapter runs tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorKind {
    /// Echo the arguments back; no backend needed
    #[default]
    Echo,
    /// Spawn an external command per invocation
    Command,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutorConfig {
    pub kind: ExecutorKind,
    /// argv of the backend command (command executor only)
    pub command: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for FileExecutorConfig {
    fn default() -> Self {
        Self {
            kind: ExecutorKind::Echo,
            command: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
