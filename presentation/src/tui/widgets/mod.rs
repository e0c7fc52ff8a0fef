//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Tools (30%) ──┬── Form (flex) ─────────────┐
//! │                 ├── Result (40%) ────────────┤
//! └── StatusBar (1) ─────────────────────────────┘

pub mod form;
pub mod result;
pub mod status_bar;
pub mod tool_list;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub tools: Rect,
    pub form: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        Self {
            tools: columns[0],
            form: right[0],
            result: right[1],
            status_bar: rows[1],
        }
    }
}
