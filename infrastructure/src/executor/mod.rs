//! Tool executor adapters
//!
//! Implementations of [`ToolExecutorPort`]:
//! - [`EchoToolExecutor`]: returns the arguments, no backend required
//! - [`CommandToolExecutor`]: one child process per invocation

mod command;
mod echo;

pub use command::CommandToolExecutor;
pub use echo::EchoToolExecutor;

use crate::config::{DEFAULT_TIMEOUT_SECS, ExecutorKind, FileExecutorConfig};
use inspector_application::{ExecutorError, ToolExecutorPort};
use std::sync::Arc;
use std::time::Duration;

/// Build the executor selected by the `[executor]` section
pub fn build_executor(
    config: &FileExecutorConfig,
) -> Result<Arc<dyn ToolExecutorPort>, ExecutorError> {
    match config.kind {
        ExecutorKind::Echo => Ok(Arc::new(EchoToolExecutor)),
        ExecutorKind::Command => {
            let secs = match config.timeout_secs {
                0 => DEFAULT_TIMEOUT_SECS,
                n => n,
            };
            let executor = CommandToolExecutor::new(&config.command, Duration::from_secs(secs))?;
            Ok(Arc::new(executor))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_default_is_echo() {
        assert!(build_executor(&FileExecutorConfig::default()).is_ok());
    }

    #[test]
    fn test_build_command_requires_argv() {
        let config = FileExecutorConfig {
            kind: ExecutorKind::Command,
            ..Default::default()
        };
        assert!(matches!(
            build_executor(&config),
            Err(ExecutorError::Spawn(_))
        ));
    }
}
