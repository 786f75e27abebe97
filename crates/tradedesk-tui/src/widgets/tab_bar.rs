//! Page tab bar with shortcut digits

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols,
    text::Line,
    widgets::{Block, Borders, Tabs, Widget},
};

use tradedesk_app::Page;

use crate::theme::Theme;

pub struct TabBar {
    current: Page,
    theme: Theme,
}

impl TabBar {
    pub fn new(current: Page, theme: Theme) -> Self {
        Self { current, theme }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = Page::ALL
            .iter()
            .map(|page| Line::from(format!("{} {}", page.shortcut(), page.label())))
            .collect();

        let selected = Page::ALL
            .iter()
            .position(|p| *p == self.current)
            .unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .style(self.theme.dimmed())
            .highlight_style(self.theme.title())
            .divider(symbols::line::VERTICAL)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
