//! TUI application state
//!
//! Holds the cursor positions and transient messages. Tool data, drafts and
//! results live in the [`ToolsSession`]; the state only points into it.

use super::event::{KeyAction, TuiEvent};
use crate::form::toggled;
use inspector_application::{PendingInvocation, SessionError, ToolsSession};
use inspector_domain::{CoercionError, ControlKind, FieldView, SubmitError};
use tracing::debug;

/// Central TUI state, owned by the TuiApp select! loop
#[derive(Debug, Default)]
pub struct TuiState {
    /// Highlighted tool in the catalog list
    pub tool_index: usize,
    /// Focused field of the selected tool's form
    pub field_index: usize,
    /// Coercion errors from the last rejected submission
    pub errors: Vec<CoercionError>,
    /// Tools with an invocation in flight
    pub running: Vec<String>,
    pub flash: Option<String>,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the highlighted tool in the session. Called on startup and
    /// whenever the highlight moves.
    pub fn sync_selection(&mut self, session: &mut ToolsSession) {
        let Some(name) = session
            .tools()
            .at(self.tool_index)
            .map(|t| t.name.clone())
        else {
            return;
        };
        match session.select_tool(&name) {
            Ok(true) => {
                self.field_index = 0;
                self.errors.clear();
            }
            Ok(false) => {}
            Err(e) => self.flash = Some(e.to_string()),
        }
    }

    /// Control kind of the focused field, if any
    pub fn focused_control(&self, session: &ToolsSession) -> Option<ControlKind> {
        session.fields().get(self.field_index).map(|f| f.control)
    }

    /// Apply a key action. Returns an invocation to run when the action
    /// submitted a valid form.
    pub fn apply(
        &mut self,
        session: &mut ToolsSession,
        action: KeyAction,
    ) -> Option<PendingInvocation> {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::PrevTool => {
                if self.tool_index > 0 {
                    self.tool_index -= 1;
                    self.sync_selection(session);
                }
            }
            KeyAction::NextTool => {
                if self.tool_index + 1 < session.tools().len() {
                    self.tool_index += 1;
                    self.sync_selection(session);
                }
            }
            KeyAction::NextField => {
                let count = session.fields().len();
                if count > 0 {
                    self.field_index = (self.field_index + 1) % count;
                }
            }
            KeyAction::PrevField => {
                let count = session.fields().len();
                if count > 0 {
                    self.field_index = (self.field_index + count - 1) % count;
                }
            }
            KeyAction::Input(c) => self.edit_focused(session, |field| {
                let mut raw = field.raw.to_string();
                raw.push(c);
                raw
            }),
            KeyAction::Backspace => self.edit_focused(session, |field| {
                let mut raw = field.raw.to_string();
                raw.pop();
                raw
            }),
            KeyAction::Toggle => self.edit_focused(session, |field| toggled(field).to_string()),
            KeyAction::Submit => return self.submit(session),
            KeyAction::None => {}
        }
        None
    }

    fn edit_focused(
        &mut self,
        session: &mut ToolsSession,
        edit: impl FnOnce(&FieldView<'_>) -> String,
    ) {
        let Some((name, raw)) = session
            .fields()
            .get(self.field_index)
            .map(|f| (f.name.to_string(), edit(f)))
        else {
            return;
        };
        if let Err(e) = session.update_field(&name, raw) {
            self.flash = Some(e.to_string());
        }
    }

    fn submit(&mut self, session: &mut ToolsSession) -> Option<PendingInvocation> {
        match session.submit() {
            Ok(pending) => {
                self.errors.clear();
                self.flash = Some(format!("Submitted {} {}", pending.tool_name, pending.id));
                Some(pending)
            }
            Err(SessionError::Submit(SubmitError::Invalid { errors, .. })) => {
                self.flash = Some(format!("{} invalid parameter(s)", errors.len()));
                self.errors = errors;
                None
            }
            Err(e) => {
                self.flash = Some(e.to_string());
                None
            }
        }
    }

    /// Apply an event from an invocation task
    pub fn apply_event(&mut self, session: &mut ToolsSession, event: TuiEvent) {
        match event {
            TuiEvent::InvocationStarted { tool_name } => {
                self.running.push(tool_name);
            }
            TuiEvent::InvocationFinished { tool_name, success } => {
                if let Some(pos) = self.running.iter().position(|t| *t == tool_name) {
                    self.running.remove(pos);
                }
                let status = if success { "finished" } else { "failed" };
                self.flash = Some(format!("{} {}", tool_name, status));
            }
            TuiEvent::Outcome(outcome) => {
                debug!("Recording result {} for '{}'", outcome.id, outcome.tool_name);
                session.record_outcome(outcome);
            }
        }
    }

    /// Coercion error for a field of the last rejected submission
    pub fn error_for(&self, parameter: &str) -> Option<&CoercionError> {
        self.errors.iter().find(|e| e.parameter == parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use inspector_application::{
        CatalogError, ExecutorError, InvocationId, InvocationOutcome, ToolCatalogPort,
        ToolExecutorPort, ToolPage,
    };
    use inspector_domain::{
        BooleanVocabulary, CoercedArguments, ParameterSchema, SchemaResolver, SchemaType,
        ToolCallResult, ToolDescriptor,
    };
    use std::sync::Arc;

    struct FixedCatalog;

    #[async_trait]
    impl ToolCatalogPort for FixedCatalog {
        async fn list_tools(&self, _cursor: Option<&str>) -> Result<ToolPage, CatalogError> {
            Ok(ToolPage {
                tools: vec![
                    ToolDescriptor::new("tool1", "First tool")
                        .with_parameter(ParameterSchema::new("num", SchemaType::Number).required())
                        .with_parameter(ParameterSchema::new("flag", SchemaType::Boolean)),
                    ToolDescriptor::new("tool3", "Integer tool")
                        .with_parameter(ParameterSchema::new("count", SchemaType::Integer)),
                ],
                next_cursor: None,
            })
        }
    }

    struct NeverExecutor;

    #[async_trait]
    impl ToolExecutorPort for NeverExecutor {
        async fn call_tool(
            &self,
            _tool_name: &str,
            _arguments: &CoercedArguments,
        ) -> Result<ToolCallResult, ExecutorError> {
            Err(ExecutorError::Protocol("not used".to_string()))
        }
    }

    async fn session() -> ToolsSession {
        let mut session = ToolsSession::new(Arc::new(FixedCatalog), Arc::new(NeverExecutor));
        session.list_tools().await.unwrap();
        session
    }

    fn type_text(state: &mut TuiState, session: &mut ToolsSession, text: &str) {
        for c in text.chars() {
            state.apply(session, KeyAction::Input(c));
        }
    }

    #[tokio::test]
    async fn test_startup_selects_first_tool() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);
        assert_eq!(session.selected_tool().unwrap().name, "tool1");
        assert_eq!(
            state.focused_control(&session),
            Some(ControlKind::NumericInput)
        );
    }

    #[tokio::test]
    async fn test_typing_edits_focused_field() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);

        type_text(&mut state, &mut session, "4.25");
        state.apply(&mut session, KeyAction::Backspace);

        assert_eq!(session.form().raw_value("num"), "4.2");
    }

    #[tokio::test]
    async fn test_toggle_boolean_field() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);

        state.apply(&mut session, KeyAction::NextField);
        assert_eq!(
            state.focused_control(&session),
            Some(ControlKind::BooleanInput)
        );
        state.apply(&mut session, KeyAction::Toggle);
        assert_eq!(session.form().raw_value("flag"), "true");
        state.apply(&mut session, KeyAction::Toggle);
        assert_eq!(session.form().raw_value("flag"), "false");
    }

    #[tokio::test]
    async fn test_toggle_reads_configured_words() {
        let resolver =
            SchemaResolver::with_booleans(BooleanVocabulary::with_extra(["ja"], ["nein"]));
        let mut session = ToolsSession::new(Arc::new(FixedCatalog), Arc::new(NeverExecutor))
            .with_resolver(resolver);
        session.list_tools().await.unwrap();
        let mut state = TuiState::new();
        state.sync_selection(&mut session);

        session.update_field("flag", "ja").unwrap();
        state.apply(&mut session, KeyAction::NextField);
        state.apply(&mut session, KeyAction::Toggle);

        assert_eq!(session.form().raw_value("flag"), "false");
    }

    #[tokio::test]
    async fn test_field_focus_wraps() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);

        state.apply(&mut session, KeyAction::PrevField);
        assert_eq!(state.field_index, 1);
        state.apply(&mut session, KeyAction::NextField);
        assert_eq!(state.field_index, 0);
    }

    #[tokio::test]
    async fn test_switching_tools_clears_drafts() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);
        type_text(&mut state, &mut session, "7");

        state.apply(&mut session, KeyAction::NextTool);
        assert_eq!(session.selected_tool().unwrap().name, "tool3");
        state.apply(&mut session, KeyAction::PrevTool);

        assert_eq!(session.form().raw_value("num"), "");
        assert_eq!(state.field_index, 0);
    }

    #[tokio::test]
    async fn test_invalid_submit_keeps_errors_and_drafts() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);
        type_text(&mut state, &mut session, "abc");

        let pending = state.apply(&mut session, KeyAction::Submit);

        assert!(pending.is_none());
        assert!(state.error_for("num").is_some());
        assert_eq!(session.form().raw_value("num"), "abc");
    }

    #[tokio::test]
    async fn test_valid_submit_returns_invocation() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);
        type_text(&mut state, &mut session, "42");

        let pending = state.apply(&mut session, KeyAction::Submit).unwrap();

        assert_eq!(pending.tool_name, "tool1");
        assert_eq!(
            pending.arguments.get("num"),
            Some(&serde_json::json!(42.0))
        );
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_late_outcome_is_attributed_to_its_tool() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.sync_selection(&mut session);
        type_text(&mut state, &mut session, "1");
        let pending = state.apply(&mut session, KeyAction::Submit).unwrap();

        state.apply(&mut session, KeyAction::NextTool);
        state.apply_event(
            &mut session,
            TuiEvent::InvocationStarted {
                tool_name: pending.tool_name.clone(),
            },
        );
        state.apply_event(
            &mut session,
            TuiEvent::Outcome(InvocationOutcome {
                id: InvocationId(1),
                tool_name: pending.tool_name.clone(),
                arguments: pending.arguments,
                result: Ok(ToolCallResult::text("done")),
            }),
        );
        state.apply_event(
            &mut session,
            TuiEvent::InvocationFinished {
                tool_name: "tool1".to_string(),
                success: true,
            },
        );

        assert!(state.running.is_empty());
        assert!(session.active_result().is_none());
        assert_eq!(session.result_for("tool1").unwrap().tool_name, "tool1");
    }

    #[tokio::test]
    async fn test_quit() {
        let mut session = session().await;
        let mut state = TuiState::new();
        state.apply(&mut session, KeyAction::Quit);
        assert!(state.should_quit);
    }
}
