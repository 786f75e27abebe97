//! Subscription upgrade dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tradedesk_app::wizards::{PaymentField, UpgradeFlow, UpgradeStep};
use tradedesk_core::{pricing, BillingCycle};

use crate::theme::Theme;

use super::modal::dialog_frame;

pub struct UpgradeDialog<'a> {
    flow: &'a UpgradeFlow,
    theme: Theme,
}

impl<'a> UpgradeDialog<'a> {
    pub fn new(flow: &'a UpgradeFlow, theme: Theme) -> Self {
        Self { flow, theme }
    }

    fn summary_lines(&self) -> Vec<Line<'_>> {
        let f = self.flow;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(f.current.label(), self.theme.dimmed()),
                Span::styled("  ->  ", self.theme.normal()),
                Span::styled(f.target.label(), self.theme.title()),
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled(
                    format!("{} billing   ", f.cycle.label()),
                    self.theme.normal(),
                ),
                Span::styled(
                    pricing::format_amount("USD", f.price()),
                    self.theme.title(),
                ),
                Span::styled(
                    match f.cycle {
                        BillingCycle::Monthly => "/mo",
                        BillingCycle::Yearly => "/yr",
                    },
                    self.theme.dimmed(),
                ),
            ]),
        ];
        if f.cycle == BillingCycle::Yearly && f.yearly_savings() > 0.0 {
            lines.push(Line::styled(
                format!(
                    "You save {}",
                    pricing::format_amount("USD", f.yearly_savings())
                ),
                self.theme.success(),
            ));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "b toggle billing · Enter continue to payment · Esc cancel",
            self.theme.dimmed(),
        ));
        lines
    }

    fn payment_field(&self, field: PaymentField, value: &str, mask: bool) -> Line<'_> {
        let focused = self.flow.field == field;
        let marker = if focused { "> " } else { "  " };
        let shown = if mask {
            "*".repeat(value.len())
        } else {
            value.to_string()
        };
        let mut spans = vec![
            Span::styled(
                format!("{marker}{:<14}", field.label()),
                if focused {
                    self.theme.title()
                } else {
                    self.theme.dimmed()
                },
            ),
            Span::styled(shown, self.theme.normal()),
        ];
        if focused && field != PaymentField::Pay {
            spans.push(Span::styled("_", self.theme.title()));
        }
        Line::from(spans)
    }

    fn payment_lines(&self) -> Vec<Line<'_>> {
        let f = self.flow;
        let mut lines = vec![
            Line::styled(
                format!(
                    "Charging {} for {}",
                    pricing::format_amount("USD", f.price()),
                    f.target.label()
                ),
                self.theme.normal(),
            ),
            Line::raw(""),
            self.payment_field(PaymentField::CardNumber, &f.card_number, false),
            self.payment_field(PaymentField::Expiry, &f.expiry, false),
            self.payment_field(PaymentField::Cvc, &f.cvc, true),
            Line::raw(""),
        ];

        if f.processing {
            lines.push(Line::styled("Processing payment…", self.theme.warning()));
        } else {
            let style = if f.field == PaymentField::Pay {
                self.theme.selected()
            } else {
                self.theme.title()
            };
            lines.push(Line::from(Span::styled(" [ Pay now ] ", style)));
        }
        if let Some(ref error) = f.error {
            lines.push(Line::styled(error.clone(), self.theme.error()));
        }
        lines.push(Line::styled(
            "Payments are encrypted end to end",
            self.theme.dimmed(),
        ));
        lines
    }
}

impl Widget for UpgradeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.flow.step {
            UpgradeStep::Summary => "Upgrade · summary",
            UpgradeStep::Payment => "Upgrade · payment",
            UpgradeStep::Success => "Upgrade · done",
        };
        let inner = dialog_frame(area, buf, title, 56, 12, self.theme);

        let lines = match self.flow.step {
            UpgradeStep::Summary => self.summary_lines(),
            UpgradeStep::Payment => self.payment_lines(),
            UpgradeStep::Success => vec![
                Line::raw(""),
                Line::styled(
                    format!("Welcome to {}", self.flow.target.label()),
                    self.theme.success(),
                ),
                Line::styled("Closing…", self.theme.dimmed()),
            ],
        };

        Paragraph::new(lines).render(inner, buf);
    }
}
