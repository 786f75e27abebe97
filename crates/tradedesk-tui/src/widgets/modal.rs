//! Shared modal scaffolding for overlay dialogs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Clear, Widget},
};

use crate::layout::centered;
use crate::theme::Theme;

/// Clear a centered region and draw the dialog frame; returns the inner area
pub fn dialog_frame(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    width: u16,
    height: u16,
    theme: Theme,
) -> Rect {
    let popup = centered(area, width, height);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(theme.title());
    let inner = block.inner(popup);
    block.render(popup, buf);
    inner
}
