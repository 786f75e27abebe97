//! Back-office dashboard panes

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use tradedesk_app::state::DashboardState;
use tradedesk_core::pricing;

use crate::theme::Theme;

pub struct Dashboard<'a> {
    dashboard: &'a DashboardState,
    theme: Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(dashboard: &'a DashboardState, theme: Theme) -> Self {
        Self { dashboard, theme }
    }

    fn sales_pane(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Sales ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![Line::from(vec![
            Span::styled("Revenue ", self.theme.dimmed()),
            Span::styled(
                pricing::format_amount("USD", self.dashboard.total_revenue()),
                self.theme.title(),
            ),
            Span::styled("   Orders ", self.theme.dimmed()),
            Span::styled(
                self.dashboard.total_orders().to_string(),
                self.theme.title(),
            ),
        ])];

        let peak = self
            .dashboard
            .sales
            .iter()
            .map(|p| p.revenue)
            .fold(0.0_f64, f64::max);
        let rows = (inner.height as usize).saturating_sub(1);
        let tail = self.dashboard.sales.len().saturating_sub(rows);
        for point in self.dashboard.sales.iter().skip(tail) {
            let bar_width = if peak > 0.0 {
                ((point.revenue / peak) * 24.0).round() as usize
            } else {
                0
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", point.date), self.theme.dimmed()),
                Span::styled("█".repeat(bar_width), self.theme.success()),
                Span::styled(format!(" {:.0}", point.revenue), self.theme.normal()),
            ]));
        }
        Paragraph::new(lines).render(inner, buf);
    }

    fn categories_pane(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Categories ").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .dashboard
            .categories
            .iter()
            .take(inner.height as usize)
            .map(|c| {
                let bar = "▦".repeat(((c.share * 20.0).round() as usize).min(20));
                Line::from(vec![
                    Span::styled(format!("{:<14}", c.name), self.theme.normal()),
                    Span::styled(bar, self.theme.title()),
                    Span::styled(
                        format!(" {} ({:.0}%)", c.product_count, c.share * 100.0),
                        self.theme.dimmed(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn top_products_pane(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Top products ")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .dashboard
            .top_products
            .iter()
            .take(inner.height as usize)
            .enumerate()
            .map(|(i, p)| {
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), self.theme.dimmed()),
                    Span::styled(p.name.clone(), self.theme.normal()),
                    Span::styled(
                        format!("  {} orders, {:.0}", p.orders, p.revenue),
                        self.theme.dimmed(),
                    ),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.dashboard.loading && !self.dashboard.loaded {
            Paragraph::new(Line::styled("loading dashboard…", self.theme.dimmed()))
                .block(Block::default().borders(Borders::ALL))
                .render(area, buf);
            return;
        }

        let [sales, lower] =
            Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
        let [categories, top] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(lower);

        self.sales_pane(sales, buf);
        self.categories_pane(categories, buf);
        self.top_products_pane(top, buf);
    }
}
