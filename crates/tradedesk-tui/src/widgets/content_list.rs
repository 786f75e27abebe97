//! Card-style list for CMS content (blog, FAQ, press)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// One rendered row: primary text plus a dimmed meta line
#[derive(Debug, Clone)]
pub struct ContentRow {
    pub primary: String,
    pub meta: String,
    /// Featured rows get the accent marker
    pub featured: bool,
}

pub struct ContentList<'a> {
    title: &'a str,
    rows: Vec<ContentRow>,
    selected: usize,
    theme: Theme,
}

impl<'a> ContentList<'a> {
    pub fn new(title: &'a str, rows: Vec<ContentRow>, selected: usize, theme: Theme) -> Self {
        Self {
            title,
            rows,
            selected,
            theme,
        }
    }
}

impl Widget for ContentList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        // Two text lines per card; keep the selection in view
        let per_row: usize = 2;
        let visible_rows = (inner.height as usize / per_row).max(1);
        let first = self
            .selected
            .saturating_sub(visible_rows.saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        for (i, row) in self.rows.iter().enumerate().skip(first).take(visible_rows) {
            let marker = if i == self.selected { "> " } else { "  " };
            let star = if row.featured { "* " } else { "" };
            let primary_style = if i == self.selected {
                self.theme.selected()
            } else {
                self.theme.normal()
            };

            let primary = truncate(&format!("{marker}{star}{}", row.primary), inner.width);
            lines.push(Line::from(Span::styled(primary, primary_style)));
            let meta = truncate(&format!("    {}", row.meta), inner.width);
            lines.push(Line::from(Span::styled(meta, self.theme.dimmed())));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate to the cell width, appending an ellipsis when cut
fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 1 >= width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
