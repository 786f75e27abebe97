//! Explicit empty state for list pages

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Theme;

/// Rendered when a completed load (or active filter) yields no rows
pub struct EmptyState<'a> {
    title: &'a str,
    /// True when filters are active, so the hint offers clearing them
    filtered: bool,
    theme: Theme,
}

impl<'a> EmptyState<'a> {
    pub fn new(title: &'a str, filtered: bool, theme: Theme) -> Self {
        Self {
            title,
            filtered,
            theme,
        }
    }
}

impl Widget for EmptyState<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = if self.filtered {
            "Try changing filters, or press c to clear them"
        } else {
            "Nothing here yet. Press r to refresh."
        };
        let lines = vec![
            Line::raw(""),
            Line::styled(self.title.to_string(), self.theme.title()),
            Line::styled(hint.to_string(), self.theme.dimmed()),
        ];
        Paragraph::new(lines)
            .centered()
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
