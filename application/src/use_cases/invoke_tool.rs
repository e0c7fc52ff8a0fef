//! Invoke Tool use case.
//!
//! Hands a validated [`PendingInvocation`] to the [`ToolExecutorPort`] and
//! wraps whatever comes back in an [`InvocationOutcome`] that still carries
//! the originating tool name.
//!
//! The use case never looks at form state. A result that arrives after the
//! user switched to another tool is attributed to the tool it was issued
//! for, because that name travels with the invocation.

use crate::ports::invocation_logger::{InvocationEvent, InvocationLogger, NoInvocationLogger};
use crate::ports::progress::InvocationProgressNotifier;
use crate::ports::tool_executor::{ExecutorError, ToolExecutorPort};
use inspector_domain::{CoercedArguments, ToolCallResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Monotonic identifier of a submission within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvocationId(pub u64);

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submitted, fully coerced invocation that has not run yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingInvocation {
    pub id: InvocationId,
    pub tool_name: String,
    pub arguments: CoercedArguments,
}

/// Result of running a [`PendingInvocation`]
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationOutcome {
    pub id: InvocationId,
    /// Tool the invocation was issued for, regardless of what is selected now
    pub tool_name: String,
    pub arguments: CoercedArguments,
    pub result: Result<ToolCallResult, ExecutorError>,
}

impl InvocationOutcome {
    /// The executor answered and the tool did not report an error
    pub fn is_success(&self) -> bool {
        matches!(&self.result, Ok(r) if r.is_success())
    }
}

/// Use case for running one tool invocation against the executor.
#[derive(Clone)]
pub struct InvokeToolUseCase {
    executor: Arc<dyn ToolExecutorPort>,
    invocation_logger: Arc<dyn InvocationLogger>,
}

impl InvokeToolUseCase {
    pub fn new(executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            executor,
            invocation_logger: Arc::new(NoInvocationLogger),
        }
    }

    /// Create with an invocation logger.
    pub fn with_invocation_logger(mut self, logger: Arc<dyn InvocationLogger>) -> Self {
        self.invocation_logger = logger;
        self
    }

    /// Run the invocation. Executor failures are captured in the outcome,
    /// never returned as an error.
    pub async fn execute(
        &self,
        pending: PendingInvocation,
        progress: &dyn InvocationProgressNotifier,
    ) -> InvocationOutcome {
        let PendingInvocation {
            id,
            tool_name,
            arguments,
        } = pending;

        info!("Invoking tool '{}' ({})", tool_name, id);
        progress.on_invocation_start(&tool_name);

        let result = self.executor.call_tool(&tool_name, &arguments).await;

        match &result {
            Ok(r) => self.invocation_logger.log(InvocationEvent::new(
                "tool_result",
                serde_json::json!({
                    "id": id.0,
                    "tool": tool_name,
                    "is_error": r.is_error,
                    "content": r.content,
                }),
            )),
            Err(e) => {
                warn!("Tool '{}' ({}) failed: {}", tool_name, id, e);
                self.invocation_logger.log(InvocationEvent::new(
                    "executor_error",
                    serde_json::json!({
                        "id": id.0,
                        "tool": tool_name,
                        "error": e.to_string(),
                    }),
                ));
            }
        }

        let outcome = InvocationOutcome {
            id,
            tool_name,
            arguments,
            result,
        };
        progress.on_invocation_complete(&outcome.tool_name, outcome.is_success());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use async_trait::async_trait;
    use inspector_domain::CoercedValue;
    use std::sync::Mutex;

    struct FailingExecutor;

    #[async_trait]
    impl ToolExecutorPort for FailingExecutor {
        async fn call_tool(
            &self,
            tool_name: &str,
            _arguments: &CoercedArguments,
        ) -> Result<ToolCallResult, ExecutorError> {
            Err(ExecutorError::Timeout {
                tool: tool_name.to_string(),
                seconds: 1,
            })
        }
    }

    struct EchoExecutor;

    #[async_trait]
    impl ToolExecutorPort for EchoExecutor {
        async fn call_tool(
            &self,
            _tool_name: &str,
            arguments: &CoercedArguments,
        ) -> Result<ToolCallResult, ExecutorError> {
            Ok(ToolCallResult::text(arguments.to_value().to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl InvocationProgressNotifier for RecordingProgress {
        fn on_invocation_start(&self, tool_name: &str) {
            self.events.lock().unwrap().push(format!("start:{tool_name}"));
        }

        fn on_invocation_complete(&self, tool_name: &str, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{tool_name}:{success}"));
        }
    }

    fn pending(tool: &str) -> PendingInvocation {
        let mut arguments = CoercedArguments::new();
        arguments.insert("count", CoercedValue::Integer(42));
        PendingInvocation {
            id: InvocationId(7),
            tool_name: tool.to_string(),
            arguments,
        }
    }

    #[tokio::test]
    async fn test_execute_success() {
        let use_case = InvokeToolUseCase::new(Arc::new(EchoExecutor));
        let progress = RecordingProgress::default();

        let outcome = use_case.execute(pending("tool3"), &progress).await;

        assert!(outcome.is_success());
        assert_eq!(outcome.id, InvocationId(7));
        assert_eq!(outcome.tool_name, "tool3");
        assert_eq!(outcome.result.unwrap().text_content(), r#"{"count":42}"#);
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec!["start:tool3".to_string(), "done:tool3:true".to_string()]
        );
    }

    #[tokio::test]
    async fn test_executor_failure_is_captured() {
        let use_case = InvokeToolUseCase::new(Arc::new(FailingExecutor));

        let outcome = use_case.execute(pending("slow"), &NoProgress).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.tool_name, "slow");
        assert!(matches!(outcome.result, Err(ExecutorError::Timeout { .. })));
    }

    #[test]
    fn test_invocation_id_display() {
        assert_eq!(InvocationId(3).to_string(), "#3");
    }
}
