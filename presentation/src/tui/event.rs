//! TUI event types and key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use inspector_application::InvocationOutcome;
use inspector_domain::ControlKind;

/// Events sent from invocation tasks back to the TUI loop
#[derive(Debug, Clone)]
pub enum TuiEvent {
    InvocationStarted { tool_name: String },
    InvocationFinished { tool_name: String, success: bool },
    Outcome(InvocationOutcome),
}

/// What a key press asks the TUI to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    PrevTool,
    NextTool,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    Toggle,
    Submit,
    None,
}

/// Map a key press to an action. `focused` is the control of the focused field.
///
/// | Key | Action |
/// |-----|--------|
/// | Esc, Ctrl+C | quit |
/// | Up / Down | previous / next tool |
/// | Tab / Shift+Tab | next / previous field |
/// | Space on a boolean field | toggle |
/// | Enter | submit |
///
/// Numeric fields only take characters that can appear in a number
/// (`0-9 + - . e E`); other characters are dropped.
pub fn key_action(key: KeyEvent, focused: Option<ControlKind>) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up => KeyAction::PrevTool,
        KeyCode::Down => KeyAction::NextTool,
        KeyCode::Tab => KeyAction::NextField,
        KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(' ') if focused == Some(ControlKind::BooleanInput) => KeyAction::Toggle,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if focused == Some(ControlKind::NumericInput) && !is_numeric_char(c) {
                KeyAction::None
            } else {
                KeyAction::Input(c)
            }
        }
        _ => KeyAction::None,
    }
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}
