//! Unified search page: query line, result-type tabs, hit list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use tradedesk_app::{InputMode, SearchState};
use tradedesk_core::{pricing, query::is_all_sentinel, HitKind};

use crate::theme::Theme;

use super::empty_state::EmptyState;

pub struct SearchPage<'a> {
    search: &'a SearchState,
    input_mode: InputMode,
    theme: Theme,
}

impl<'a> SearchPage<'a> {
    pub fn new(search: &'a SearchState, input_mode: InputMode, theme: Theme) -> Self {
        Self {
            search,
            input_mode,
            theme,
        }
    }

    fn query_line(&self) -> Line<'_> {
        let mut spans = vec![
            Span::styled("Search: ", self.theme.title()),
            Span::styled(self.search.input.clone(), self.theme.normal()),
        ];
        if self.input_mode == InputMode::Filter {
            spans.push(Span::styled("_", self.theme.title()));
        }
        if self.search.loading {
            spans.push(Span::styled("  searching…", self.theme.dimmed()));
        } else if !self.search.submitted.is_empty() {
            spans.push(Span::styled(
                format!(
                    "  {} results for \"{}\"",
                    self.search.visible_len(),
                    self.search.submitted
                ),
                self.theme.dimmed(),
            ));
        }
        Line::from(spans)
    }

    fn tabs_line(&self) -> Line<'_> {
        let current = self.search.filter.category.as_str();
        let mut spans: Vec<Span> = Vec::new();
        for (tag, label) in [
            ("all", "All"),
            ("product", "Products"),
            ("supplier", "Suppliers"),
            ("category", "Categories"),
        ] {
            let active =
                current == tag || (tag == "all" && is_all_sentinel(current));
            let style = if active {
                self.theme.title()
            } else {
                self.theme.dimmed()
            };
            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw("|"));
        }
        spans.pop();
        spans.push(Span::styled(
            format!("  sort: {}", self.search.filter.sort.label()),
            self.theme.dimmed(),
        ));
        Line::from(spans)
    }
}

impl Widget for SearchPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Search ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [query_area, tabs_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        Paragraph::new(self.query_line()).render(query_area, buf);
        Paragraph::new(self.tabs_line()).render(tabs_area, buf);

        let view = self.search.visible();
        if view.is_empty() {
            if !self.search.submitted.is_empty() && !self.search.loading {
                EmptyState::new("No results", true, self.theme).render(list_area, buf);
            }
            return;
        }

        let visible_rows = list_area.height as usize;
        let first = self
            .search
            .selected
            .saturating_sub(visible_rows.saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        for (i, hit) in view.iter().enumerate().skip(first).take(visible_rows) {
            let marker = if i == self.search.selected { "> " } else { "  " };
            let kind = match hit.kind {
                HitKind::Product => "[P]",
                HitKind::Supplier => "[S]",
                HitKind::Category => "[C]",
            };
            let mut spans = vec![
                Span::styled(
                    format!("{marker}{kind} "),
                    if i == self.search.selected {
                        self.theme.selected()
                    } else {
                        self.theme.dimmed()
                    },
                ),
                Span::styled(
                    hit.title.clone(),
                    if i == self.search.selected {
                        self.theme.selected()
                    } else {
                        self.theme.normal()
                    },
                ),
            ];
            if let (Some(price), Some(currency)) = (hit.price, hit.currency.as_deref()) {
                spans.push(Span::styled(
                    format!("  {}", pricing::format_amount(currency, price)),
                    self.theme.success(),
                ));
            }
            if let Some(rating) = hit.rating {
                spans.push(Span::styled(
                    format!("  {rating:.1}*"),
                    self.theme.warning(),
                ));
            }
            if hit.verified {
                spans.push(Span::styled("  verified", self.theme.success()));
            }
            if let Some(ref subtitle) = hit.subtitle {
                spans.push(Span::styled(
                    format!("  {subtitle}"),
                    self.theme.dimmed(),
                ));
            }
            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).render(list_area, buf);
    }
}
