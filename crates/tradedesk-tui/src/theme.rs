//! Color palette and shared styles

use ratatui::style::{Color, Modifier, Style};

/// Resolved theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub surface: Color,
    pub ok: Color,
    pub warn: Color,
    pub err: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        accent: Color::Cyan,
        text: Color::White,
        dim: Color::DarkGray,
        surface: Color::Black,
        ok: Color::Green,
        warn: Color::Yellow,
        err: Color::Red,
    };

    pub const LIGHT: Theme = Theme {
        accent: Color::Blue,
        text: Color::Black,
        dim: Color::Gray,
        surface: Color::White,
        ok: Color::Green,
        warn: Color::Magenta,
        err: Color::Red,
    };

    /// Resolve a theme by its settings name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Theme {
        match name {
            "light" => Theme::LIGHT,
            _ => Theme::DARK,
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn normal(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.surface)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.ok)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warn)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.err).add_modifier(Modifier::BOLD)
    }

    pub fn badge(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }
}
