//! Filter input line shown above list pages

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tradedesk_core::query::{is_all_sentinel, FilterState, SortKey};

use crate::theme::Theme;

pub struct FilterBar<'a> {
    filter: &'a FilterState,
    /// Cursor shown while filter-input mode is active
    active: bool,
    matches: usize,
    theme: Theme,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a FilterState, active: bool, matches: usize, theme: Theme) -> Self {
        Self {
            filter,
            active,
            matches,
            theme,
        }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("/", self.theme.title()),
            Span::styled(self.filter.query.clone(), self.theme.normal()),
        ];
        if self.active {
            spans.push(Span::styled("_", self.theme.title()));
        }

        if !is_all_sentinel(&self.filter.category) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[{}]", self.filter.category),
                self.theme.warning(),
            ));
        }
        if self.filter.sort != SortKey::Relevance {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("sort: {}", self.filter.sort.label()),
                self.theme.dimmed(),
            ));
        }

        spans.push(Span::raw("  "));
        let count_style = if self.matches == 0 && self.filter.is_active() {
            self.theme.error()
        } else {
            self.theme.dimmed()
        };
        spans.push(Span::styled(
            format!("{} match(es)", self.matches),
            count_style,
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(filter: &FilterState, matches: usize) -> String {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        FilterBar::new(filter, false, matches, Theme::DARK).render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_category_chip_hidden_for_sentinel() {
        let filter = FilterState::default();
        let text = render_to_string(&filter, 5);
        assert!(!text.contains('['));
        assert!(text.contains("5 match(es)"));
    }

    #[test]
    fn test_category_chip_shown_when_filtering() {
        let filter = FilterState {
            query: "steel".to_string(),
            category: "Metals".to_string(),
            sort: SortKey::PriceAsc,
        };
        let text = render_to_string(&filter, 2);
        assert!(text.contains("[Metals]"));
        assert!(text.contains("Price: low to high"));
    }
}
