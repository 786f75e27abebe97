//! Table builders for the directory and back-office pages

use ratatui::{
    layout::Constraint,
    widgets::{Block, Borders, Cell, Row, Table},
};

use tradedesk_core::{pricing, AdminProduct, Buyer, Supplier};

use crate::theme::Theme;

fn styled_row<'a>(cells: Vec<Cell<'a>>, selected: bool, theme: Theme) -> Row<'a> {
    let row = Row::new(cells);
    if selected {
        row.style(theme.selected())
    } else {
        row.style(theme.normal())
    }
}

/// Supplier directory table
pub fn suppliers_table<'a>(view: &[&Supplier], selected: usize, theme: Theme) -> Table<'a> {
    let rows: Vec<Row> = view
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let verified = if s.verified { "yes" } else { "" };
            styled_row(
                vec![
                    Cell::from(s.company_name.clone()),
                    Cell::from(s.country.clone()),
                    Cell::from(verified),
                    Cell::from(format!("{:.1}", s.rating)),
                    Cell::from(s.subscription.label()),
                    Cell::from(s.status.label()),
                ],
                i == selected,
                theme,
            )
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Company", "Country", "Verified", "Rating", "Plan", "Status"])
            .style(theme.title()),
    )
    .block(Block::default().title(" Suppliers ").borders(Borders::ALL))
}

/// Admin moderation table
pub fn admin_products_table<'a>(view: &[&AdminProduct], selected: usize, theme: Theme) -> Table<'a> {
    let rows: Vec<Row> = view
        .iter()
        .enumerate()
        .map(|(i, p)| {
            styled_row(
                vec![
                    Cell::from(p.name.clone()),
                    Cell::from(p.category_name.clone()),
                    Cell::from(p.supplier_name.clone()),
                    Cell::from(pricing::format_amount(&p.currency, p.price)),
                    Cell::from(p.stock.to_string()),
                    Cell::from(p.status.label()),
                    Cell::from(p.views.to_string()),
                ],
                i == selected,
                theme,
            )
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec![
            "Product", "Category", "Supplier", "Price", "Stock", "Status", "Views",
        ])
        .style(theme.title()),
    )
    .block(Block::default().title(" Products ").borders(Borders::ALL))
}

/// Admin buyers table
pub fn buyers_table<'a>(view: &[&Buyer], selected: usize, theme: Theme) -> Table<'a> {
    let rows: Vec<Row> = view
        .iter()
        .enumerate()
        .map(|(i, b)| {
            styled_row(
                vec![
                    Cell::from(b.company_name.clone()),
                    Cell::from(b.contact_name.clone()),
                    Cell::from(b.country.clone()),
                    Cell::from(b.total_orders.to_string()),
                    Cell::from(format!("{:.0}", b.total_spent)),
                    Cell::from(b.status.label()),
                ],
                i == selected,
                theme,
            )
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Company", "Contact", "Country", "Orders", "Spent", "Status"])
            .style(theme.title()),
    )
    .block(Block::default().title(" Buyers ").borders(Borders::ALL))
}
