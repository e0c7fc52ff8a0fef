//! Progress notification port
//!
//! Defines the interface for reporting the progress of a tool invocation.

/// Callback for invocation progress.
///
/// Implementations live in the presentation layer (spinner, TUI status line).
pub trait InvocationProgressNotifier: Send + Sync {
    /// Called right before the executor is invoked
    fn on_invocation_start(&self, tool_name: &str);

    /// Called once the executor returned, successfully or not
    fn on_invocation_complete(&self, tool_name: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl InvocationProgressNotifier for NoProgress {
    fn on_invocation_start(&self, _tool_name: &str) {}
    fn on_invocation_complete(&self, _tool_name: &str, _success: bool) {}
}
