//! Progress bridge: forwards invocation progress to the TUI loop

use super::event::TuiEvent;
use inspector_application::InvocationProgressNotifier;
use tokio::sync::mpsc;

pub struct TuiProgressBridge {
    tx: mpsc::UnboundedSender<TuiEvent>,
}

impl TuiProgressBridge {
    pub fn new(tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { tx }
    }
}

impl InvocationProgressNotifier for TuiProgressBridge {
    fn on_invocation_start(&self, tool_name: &str) {
        let _ = self.tx.send(TuiEvent::InvocationStarted {
            tool_name: tool_name.to_string(),
        });
    }

    fn on_invocation_complete(&self, tool_name: &str, success: bool) {
        let _ = self.tx.send(TuiEvent::InvocationFinished {
            tool_name: tool_name.to_string(),
            success,
        });
    }
}
