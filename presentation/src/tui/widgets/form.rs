//! Form widget: one control per parameter of the selected tool

use crate::form::{display_value, field_label};
use crate::tui::state::TuiState;
use inspector_application::ToolsSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct FormWidget<'a> {
    session: &'a ToolsSession,
    state: &'a TuiState,
}

impl<'a> FormWidget<'a> {
    pub fn new(session: &'a ToolsSession, state: &'a TuiState) -> Self {
        Self { session, state }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let Some(tool) = self.session.selected_tool() else {
            return vec![Line::from(Span::styled(
                "Select a tool",
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let mut lines = Vec::new();
        if !tool.description.is_empty() {
            lines.push(Line::from(Span::styled(
                tool.description.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }

        let fields = self.session.fields();
        if fields.is_empty() {
            lines.push(Line::from("(no parameters)"));
        }

        for (i, field) in fields.iter().enumerate() {
            let focused = i == self.state.field_index;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let cursor = if focused { "▌" } else { "" };
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", field_label(field)), label_style),
                Span::raw(display_value(field)),
                Span::styled(cursor, Style::default().fg(Color::Yellow)),
            ]));

            if let Some(desc) = field.description {
                lines.push(Line::from(Span::styled(
                    format!("    {}", desc),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            if let Some(err) = self.state.error_for(field.name) {
                lines.push(Line::from(Span::styled(
                    format!("    {}, got {:?}", err.reason, err.raw),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        lines
    }
}

impl Widget for FormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.session.selected_tool() {
            Some(tool) => format!(" {} ", tool.name),
            None => " Form ".to_string(),
        };
        Paragraph::new(self.lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
