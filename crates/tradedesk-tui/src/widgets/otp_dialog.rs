//! Passcode sign-in dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tradedesk_app::wizards::{OtpLogin, OtpStep};
use tradedesk_core::OtpMethod;

use crate::theme::Theme;

use super::modal::dialog_frame;

pub struct OtpDialog<'a> {
    login: &'a OtpLogin,
    theme: Theme,
}

impl<'a> OtpDialog<'a> {
    pub fn new(login: &'a OtpLogin, theme: Theme) -> Self {
        Self { login, theme }
    }
}

impl Widget for OtpDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = dialog_frame(area, buf, "Sign in", 52, 11, self.theme);
        let l = self.login;

        let mut lines: Vec<Line> = Vec::new();
        match l.step {
            OtpStep::MethodSelect => {
                lines.push(Line::from(vec![
                    Span::styled("Method: ", self.theme.dimmed()),
                    Span::styled(l.method.label(), self.theme.title()),
                    Span::styled("  (←/→ to switch)", self.theme.dimmed()),
                ]));
                let prompt = match l.method {
                    OtpMethod::Email => "Email address",
                    OtpMethod::Phone => "Phone number",
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{prompt}: "), self.theme.dimmed()),
                    Span::styled(l.address.clone(), self.theme.normal()),
                    Span::styled("_", self.theme.title()),
                ]));
                lines.push(Line::raw(""));
                if l.sending {
                    lines.push(Line::styled("Sending code…", self.theme.warning()));
                } else {
                    lines.push(Line::styled(
                        "Enter send code · Esc cancel",
                        self.theme.dimmed(),
                    ));
                }
            }
            OtpStep::CodeSent => {
                lines.push(Line::styled(
                    format!("Code sent to {}", l.address),
                    self.theme.normal(),
                ));
                lines.push(Line::from(vec![
                    Span::styled("Code: ", self.theme.dimmed()),
                    Span::styled(l.code.clone(), self.theme.title()),
                    Span::styled("_", self.theme.title()),
                ]));
                lines.push(Line::raw(""));
                if l.verifying {
                    lines.push(Line::styled("Verifying…", self.theme.warning()));
                } else if l.can_resend() {
                    lines.push(Line::styled(
                        "Enter verify · Ctrl+R resend",
                        self.theme.dimmed(),
                    ));
                } else {
                    lines.push(Line::styled(
                        format!("Enter verify · resend in {}s", l.resend_secs()),
                        self.theme.dimmed(),
                    ));
                }
            }
            OtpStep::Verified => {
                lines.push(Line::raw(""));
                lines.push(Line::styled("Signed in", self.theme.success()));
                lines.push(Line::styled("Closing…", self.theme.dimmed()));
            }
        }

        if let Some(ref error) = l.error {
            lines.push(Line::styled(error.clone(), self.theme.error()));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
