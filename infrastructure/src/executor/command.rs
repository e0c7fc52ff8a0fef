//! Command executor: runs each invocation as a child process.
//!
//! The configured argv is spawned with the tool name appended as the last
//! argument and exported as `TOOL_NAME`. The argument object is written to
//! stdin as a single JSON document, after which stdin is closed.
//!
//! - exit status 0: stdout becomes the text content
//! - non-zero exit: the result is flagged `is_error`; stdout is used, or
//!   stderr when stdout is empty
//! - no exit within the timeout: the child is killed and the call fails with
//!   [`ExecutorError::Timeout`]

use async_trait::async_trait;
use inspector_application::{ExecutorError, ToolExecutorPort};
use inspector_domain::{CoercedArguments, ToolCallResult};
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Maximum output kept from a child (1 MB)
const MAX_OUTPUT_SIZE: usize = 1024 * 1024;

pub struct CommandToolExecutor {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandToolExecutor {
    /// Build from an argv vector. The first element is the program.
    pub fn new(argv: &[String], timeout: Duration) -> Result<Self, ExecutorError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| ExecutorError::Spawn("empty command".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            timeout,
        })
    }

    async fn run(&self, tool_name: &str, input: &[u8]) -> Result<ToolCallResult, ExecutorError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(tool_name)
            .env("TOOL_NAME", tool_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecutorError::Spawn(format!("{}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A backend that exits without reading its input is not an error
            match stdin.write_all(input).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                Err(e) => return Err(ExecutorError::Io(e.to_string())),
            }
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExecutorError::Io(e.to_string()))?;

        let stdout = truncate(String::from_utf8_lossy(&output.stdout).into_owned());
        let stderr = truncate(String::from_utf8_lossy(&output.stderr).into_owned());

        if output.status.success() {
            if !stderr.is_empty() {
                debug!("'{}' wrote to stderr: {}", tool_name, stderr.trim_end());
            }
            return Ok(ToolCallResult::text(stdout));
        }

        let code = output.status.code().unwrap_or(-1);
        warn!("'{}' exited with status {}", tool_name, code);
        let text = if stdout.trim().is_empty() {
            stderr
        } else {
            stdout
        };
        Ok(ToolCallResult::error(text))
    }
}

#[async_trait]
impl ToolExecutorPort for CommandToolExecutor {
    async fn call_tool(
        &self,
        tool_name: &str,
        arguments: &CoercedArguments,
    ) -> Result<ToolCallResult, ExecutorError> {
        let input = arguments.to_value().to_string();
        debug!("Running {} for '{}' with {}", self.program, tool_name, input);

        // Dropping the timed-out future drops the child, which kills it
        tokio::time::timeout(self.timeout, self.run(tool_name, input.as_bytes()))
            .await
            .map_err(|_| ExecutorError::Timeout {
                tool: tool_name.to_string(),
                seconds: self.timeout.as_secs(),
            })?
    }
}

fn truncate(mut text: String) -> String {
    if text.len() > MAX_OUTPUT_SIZE {
        let mut end = MAX_OUTPUT_SIZE;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
        text.push_str("\n... (output truncated)");
    }
    text
}
