//! Request-for-quote dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tradedesk_app::wizards::{QuoteField, QuoteStep, QuoteWizard};

use crate::theme::Theme;

use super::modal::dialog_frame;

pub struct QuoteDialog<'a> {
    wizard: &'a QuoteWizard,
    theme: Theme,
}

impl<'a> QuoteDialog<'a> {
    pub fn new(wizard: &'a QuoteWizard, theme: Theme) -> Self {
        Self { wizard, theme }
    }

    fn field_line(&self, field: QuoteField, value: String) -> Line<'_> {
        let focused = self.wizard.field == field && self.wizard.step == QuoteStep::Form;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            self.theme.title()
        } else {
            self.theme.dimmed()
        };
        let mut spans = vec![
            Span::styled(format!("{marker}{:<18}", field.label()), label_style),
            Span::styled(value, self.theme.normal()),
        ];
        if focused && field.is_selector() {
            spans.push(Span::styled("  (←/→)", self.theme.dimmed()));
        } else if focused && field != QuoteField::Submit {
            spans.push(Span::styled("_", self.theme.title()));
        }
        Line::from(spans)
    }
}

impl Widget for QuoteDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Request quote · {}", self.wizard.product_name);
        let inner = dialog_frame(area, buf, &title, 62, 18, self.theme);

        let w = self.wizard;
        let mut lines: Vec<Line> = Vec::new();

        match w.step {
            QuoteStep::Done => {
                lines.push(Line::raw(""));
                lines.push(Line::styled("Request submitted", self.theme.success()));
                if let Some(ref id) = w.created_id {
                    lines.push(Line::styled(
                        format!("Reference: {id}"),
                        self.theme.normal(),
                    ));
                }
                lines.push(Line::styled("Closing…", self.theme.dimmed()));
            }
            _ => {
                if let Some(moq) = w.moq {
                    lines.push(Line::styled(
                        format!("Minimum order: {moq}"),
                        self.theme.dimmed(),
                    ));
                }
                lines.push(self.field_line(QuoteField::Quantity, w.quantity.clone()));
                lines.push(self.field_line(QuoteField::Unit, w.unit().to_string()));
                lines.push(self.field_line(QuoteField::Specifications, w.specifications.clone()));
                lines.push(self.field_line(QuoteField::Requirements, w.requirements.clone()));
                lines.push(
                    self.field_line(QuoteField::DeliveryLocation, w.delivery_location.clone()),
                );
                lines.push(self.field_line(QuoteField::DeliveryDate, w.delivery_date.clone()));
                lines.push(self.field_line(QuoteField::Budget, w.budget.clone()));
                lines.push(self.field_line(QuoteField::Currency, w.currency().to_string()));
                lines.push(Line::raw(""));

                if w.is_submitting() {
                    lines.push(Line::styled("Submitting…", self.theme.warning()));
                } else {
                    let submit_style = if w.field == QuoteField::Submit {
                        self.theme.selected()
                    } else {
                        self.theme.title()
                    };
                    lines.push(Line::from(Span::styled(" [ Submit request ] ", submit_style)));
                }

                if let Some(ref error) = w.error {
                    lines.push(Line::styled(error.clone(), self.theme.error()));
                }
                lines.push(Line::styled(
                    "Tab next · Esc cancel",
                    self.theme.dimmed(),
                ));
            }
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
