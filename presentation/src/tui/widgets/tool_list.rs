//! Tool list widget

use crate::tui::state::TuiState;
use inspector_application::ToolsSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ToolListWidget<'a> {
    session: &'a ToolsSession,
    state: &'a TuiState,
}

impl<'a> ToolListWidget<'a> {
    pub fn new(session: &'a ToolsSession, state: &'a TuiState) -> Self {
        Self { session, state }
    }
}

impl Widget for ToolListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = self
            .session
            .tools()
            .all()
            .enumerate()
            .map(|(i, tool)| {
                let running = self.state.running.iter().any(|t| *t == tool.name);
                let marker = if running { "* " } else { "  " };
                let style = if i == self.state.tool_index {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{}{}", marker, tool.name), style))
            })
            .collect();

        if self.session.tools().is_empty() {
            lines.push(Line::from(Span::styled(
                "No tools loaded",
                Style::default().fg(Color::DarkGray),
            )));
        }
        if self.session.next_cursor().is_some() {
            lines.push(Line::from(Span::styled(
                "(more available)",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Tools "))
            .render(area, buf);
    }
}
