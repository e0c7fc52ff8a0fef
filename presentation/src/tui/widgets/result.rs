//! Result widget
//!
//! Shows the outcome for the selected tool, or else the most recent outcome
//! of any tool. The title always names the tool the result belongs to.

use inspector_application::{InvocationOutcome, ToolsSession};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultWidget<'a> {
    session: &'a ToolsSession,
}

impl<'a> ResultWidget<'a> {
    pub fn new(session: &'a ToolsSession) -> Self {
        Self { session }
    }

    fn outcome(&self) -> Option<&'a InvocationOutcome> {
        self.session
            .active_result()
            .or_else(|| self.session.last_outcome())
    }
}

impl Widget for ResultWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(outcome) = self.outcome() else {
            Paragraph::new(Line::from(Span::styled(
                "Press Enter to invoke the selected tool",
                Style::default().fg(Color::DarkGray),
            )))
            .block(Block::default().borders(Borders::ALL).title(" Result "))
            .render(area, buf);
            return;
        };

        let (text, color) = match &outcome.result {
            Ok(result) if result.is_error => (result.text_content(), Color::Red),
            Ok(result) => (result.text_content(), Color::Green),
            Err(e) => (e.to_string(), Color::Red),
        };
        let lines: Vec<Line> = text.lines().map(|l| Line::from(l.to_string())).collect();
        let title = Span::styled(
            format!(" Result: {} {} ", outcome.tool_name, outcome.id),
            Style::default().fg(color),
        );

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
