//! Header notification dropdown
//!
//! Renders the same store as the notifications page; there is no separate
//! data source for the panel.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use tradedesk_app::NotificationStore;
use tradedesk_core::NotificationPriority;

use crate::theme::Theme;

pub struct NotificationPanel<'a> {
    store: &'a NotificationStore,
    theme: Theme,
}

impl<'a> NotificationPanel<'a> {
    pub fn new(store: &'a NotificationStore, theme: Theme) -> Self {
        Self { store, theme }
    }
}

impl Widget for NotificationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Dropdown anchored to the top-right corner
        let width = 46.min(area.width.saturating_sub(2));
        let height = 14.min(area.height.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width + 1);
        let popup = Rect::new(x, area.y + 1, width, height);
        Clear.render(popup, buf);

        let title = format!(" Notifications ({} unread) ", self.store.unread_count());
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.title());
        let inner = block.inner(popup);
        block.render(popup, buf);

        if self.store.loading {
            Paragraph::new(Line::styled("loading…", self.theme.dimmed())).render(inner, buf);
            return;
        }

        let view = self.store.visible();
        if view.is_empty() {
            Paragraph::new(Line::styled("No notifications", self.theme.dimmed()))
                .render(inner, buf);
            return;
        }

        let rows = (inner.height as usize).saturating_sub(1).max(1);
        let first = self.store.selected.saturating_sub(rows.saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        for (i, n) in view.iter().enumerate().skip(first).take(rows) {
            let marker = if i == self.store.selected { ">" } else { " " };
            let dot = if n.is_read { " " } else { "•" };
            let mut style = if i == self.store.selected {
                self.theme.selected()
            } else {
                self.theme.normal()
            };
            if !n.is_read {
                style = style.add_modifier(Modifier::BOLD);
            }
            let priority = match n.priority {
                NotificationPriority::Critical => "!!",
                NotificationPriority::High => "! ",
                _ => "  ",
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker}{dot}{priority}"), self.theme.warning()),
                Span::styled(n.title.clone(), style),
            ]));
        }
        lines.push(Line::styled(
            "Enter open · d delete · a mark all · Esc close",
            self.theme.dimmed(),
        ));

        Paragraph::new(lines).render(inner, buf);
    }
}
