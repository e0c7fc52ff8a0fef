//! Status bar widget: key hints, running invocations and flash messages

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const KEY_HINTS: &str = "↑/↓:tool  Tab:field  Space:toggle  Enter:invoke  Esc:quit";

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);

        let mut spans = Vec::new();
        if !self.state.running.is_empty() {
            spans.push(Span::styled(
                format!(" running: {} ", self.state.running.join(", ")),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let right = self.state.flash.as_deref().unwrap_or(KEY_HINTS);
        spans.push(Span::styled(format!(" {}", right), bg_style));

        Paragraph::new(Line::from(spans))
            .style(bg_style)
            .render(area, buf);
    }
}
