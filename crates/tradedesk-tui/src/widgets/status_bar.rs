//! Bottom status line: transient messages and key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tradedesk_app::{AppState, InputMode, Page};

use crate::theme::Theme;

pub struct StatusBar<'a> {
    state: &'a AppState,
    theme: Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, theme: Theme) -> Self {
        Self { state, theme }
    }

    fn hints(&self) -> &'static str {
        if self.state.input_mode == InputMode::Filter {
            return "type to filter · Enter apply · Esc cancel";
        }
        match self.state.page {
            Page::Search => "/ search · f tab · s sort · Enter quote · n notifications · q quit",
            Page::AdminProducts => {
                "/ filter · f status · Enter cycle status · x delete · r refresh · q quit"
            }
            Page::Notifications => "f status · Enter open · r refresh · n panel · q quit",
            Page::Suppliers => "/ filter · v verified only · f country · s sort · r refresh · q quit",
            Page::Dashboard => "1-9 pages · r refresh · n notifications · u upgrade · q quit",
            _ => "/ filter · f category · s sort · c clear · r refresh · q quit",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.state.status.is_visible() {
            let style = if self.state.status.is_error {
                self.theme.error()
            } else {
                self.theme.success()
            };
            Line::from(Span::styled(format!(" {}", self.state.status.text), style))
        } else {
            Line::from(Span::styled(format!(" {}", self.hints()), self.theme.dimmed()))
        };
        Paragraph::new(line).render(area, buf);
    }
}
