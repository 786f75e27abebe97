//! Screen layout: header, tab bar, body, status bar

use ratatui::layout::{Constraint, Layout, Rect};

/// The four chrome regions of the screen
#[derive(Debug, Clone, Copy)]
pub struct Chrome {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the full frame into chrome regions
pub fn chrome(area: Rect) -> Chrome {
    let [header, tabs, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    Chrome {
        header,
        tabs,
        body,
        status,
    }
}

/// A centered popup rectangle clamped to the containing area
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_fills_area() {
        let c = chrome(Rect::new(0, 0, 80, 24));
        assert_eq!(c.header.height, 1);
        assert_eq!(c.tabs.height, 2);
        assert_eq!(c.status.height, 1);
        assert_eq!(
            c.header.height + c.tabs.height + c.body.height + c.status.height,
            24
        );
    }

    #[test]
    fn test_centered_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered(area, 60, 30);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn test_centered_is_centered() {
        let popup = centered(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 7);
    }
}
