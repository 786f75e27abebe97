//! Top header line: product name, plan badge, sign-in state, unread count

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tradedesk_app::AppState;

use crate::theme::Theme;

pub struct Header<'a> {
    state: &'a AppState,
    theme: Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" TradeDesk ", self.theme.title()),
            Span::styled(
                format!("[{}] ", self.state.plan.label()),
                self.theme.dimmed(),
            ),
        ];

        if self.state.signed_in {
            spans.push(Span::styled("signed in", self.theme.success()));
        } else {
            spans.push(Span::styled("guest (l to sign in)", self.theme.dimmed()));
        }

        let unread = self.state.notifications.unread_count();
        if unread > 0 {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("n({unread})"), self.theme.badge()));
        } else {
            spans.push(Span::styled("  n(0)", self.theme.dimmed()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
