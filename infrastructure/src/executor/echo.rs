//! Echo executor: answers every call with the arguments it received.

use async_trait::async_trait;
use inspector_application::{ExecutorError, ToolExecutorPort};
use inspector_domain::{CoercedArguments, ToolCallResult};
use tracing::debug;

/// Executor that needs no backend.
///
/// The result is a single text block holding the pretty-printed argument
/// object, which makes it easy to see exactly what a form produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoToolExecutor;

#[async_trait]
impl ToolExecutorPort for EchoToolExecutor {
    async fn call_tool(
        &self,
        tool_name: &str,
        arguments: &CoercedArguments,
    ) -> Result<ToolCallResult, ExecutorError> {
        debug!("Echoing {} arguments for '{}'", arguments.len(), tool_name);
        let text = serde_json::to_string_pretty(&arguments.to_value())
            .map_err(|e| ExecutorError::Protocol(e.to_string()))?;
        Ok(ToolCallResult::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspector_domain::CoercedValue;

    #[tokio::test]
    async fn test_echo_returns_typed_arguments() {
        let mut arguments = CoercedArguments::new();
        arguments.insert("num", CoercedValue::Number(42.0));
        arguments.insert("flag", CoercedValue::Boolean(true));

        let result = EchoToolExecutor.call_tool("tool1", &arguments).await.unwrap();

        assert!(result.is_success());
        let echoed: serde_json::Value = serde_json::from_str(&result.text_content()).unwrap();
        assert_eq!(echoed, serde_json::json!({ "num": 42.0, "flag": true }));
        assert!(echoed["num"].is_f64());
    }
}
