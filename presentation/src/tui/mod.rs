//! TUI (Text User Interface) for tool-inspector
//!
//! A three-pane ratatui interface over a [`ToolsSession`](inspector_application::ToolsSession):
//! tool list, form for the selected tool, and the latest result. Invocations
//! run in spawned tasks so the form stays editable while a tool is running.

mod app;
mod event;
mod progress;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::{KeyAction, TuiEvent, key_action};
pub use progress::TuiProgressBridge;
pub use state::TuiState;
