//! Top-level view function: state -> widgets

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use tradedesk_app::{AppState, InputMode, Overlay, Page};
use tradedesk_core::{BlogPost, FaqItem, Notification, PressRelease};

use crate::layout::chrome;
use crate::theme::Theme;
use crate::widgets::{
    admin_products_table, buyers_table, content_list::ContentRow, suppliers_table, ContentList,
    Dashboard, EmptyState, FilterBar, Header, NotificationPanel, OtpDialog, QuoteDialog,
    SearchPage, StatusBar, TabBar, UpgradeDialog,
};

/// Render the whole application
pub fn view(frame: &mut Frame, state: &AppState, theme: Theme) {
    let chrome = chrome(frame.area());

    frame.render_widget(Header::new(state, theme), chrome.header);
    frame.render_widget(TabBar::new(state.page, theme), chrome.tabs);
    frame.render_widget(StatusBar::new(state, theme), chrome.status);

    match state.page {
        Page::Dashboard => {
            frame.render_widget(Dashboard::new(&state.dashboard, theme), chrome.body)
        }
        Page::Blog => render_blog(frame, state, theme, chrome.body),
        Page::Faq => render_faq(frame, state, theme, chrome.body),
        Page::Press => render_press(frame, state, theme, chrome.body),
        Page::Suppliers => render_suppliers(frame, state, theme, chrome.body),
        Page::Search => frame.render_widget(
            SearchPage::new(&state.search, state.input_mode, theme),
            chrome.body,
        ),
        Page::Notifications => render_notifications(frame, state, theme, chrome.body),
        Page::AdminProducts => render_admin_products(frame, state, theme, chrome.body),
        Page::AdminBuyers => render_buyers(frame, state, theme, chrome.body),
    }

    // Overlays draw above everything else
    match state.overlay {
        Some(Overlay::NotificationPanel) => {
            frame.render_widget(NotificationPanel::new(&state.notifications, theme), frame.area())
        }
        Some(Overlay::QuoteWizard) => {
            if let Some(ref wizard) = state.quote {
                frame.render_widget(QuoteDialog::new(wizard, theme), frame.area());
            }
        }
        Some(Overlay::UpgradeFlow) => {
            if let Some(ref flow) = state.upgrade {
                frame.render_widget(UpgradeDialog::new(flow, theme), frame.area());
            }
        }
        Some(Overlay::OtpLogin) => {
            if let Some(ref login) = state.otp {
                frame.render_widget(OtpDialog::new(login, theme), frame.area());
            }
        }
        None => {}
    }
}

/// Filter bar on top, content below
fn split_filtered(area: Rect) -> (Rect, Rect) {
    let [filter, rest] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
    (filter, rest)
}

fn filter_active(state: &AppState) -> bool {
    state.input_mode == InputMode::Filter
}

fn render_blog(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.blog.visible();
    frame.render_widget(
        FilterBar::new(&state.blog.filter, filter_active(state), view.len(), theme),
        filter_area,
    );

    if state.blog.shows_empty_state() {
        frame.render_widget(
            EmptyState::new("No Posts Found", state.blog.filter.is_active(), theme),
            body,
        );
        return;
    }

    let rows = view.iter().map(|p| blog_row(p)).collect();
    frame.render_widget(
        ContentList::new("Blog", rows, state.blog.selected, theme),
        body,
    );
}

fn blog_row(post: &BlogPost) -> ContentRow {
    ContentRow {
        primary: format!("{}  [{}]", post.title, post.category),
        meta: format!(
            "{} · {} · {} min · {} views · {} likes",
            post.author_name, post.published_at, post.read_time, post.views, post.likes
        ),
        featured: post.featured,
    }
}

fn render_faq(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.faq.visible();
    frame.render_widget(
        FilterBar::new(&state.faq.filter, filter_active(state), view.len(), theme),
        filter_area,
    );

    if state.faq.shows_empty_state() {
        frame.render_widget(
            EmptyState::new("No Questions Found", state.faq.filter.is_active(), theme),
            body,
        );
        return;
    }

    let rows = view.iter().map(|f| faq_row(f)).collect();
    frame.render_widget(
        ContentList::new("FAQ", rows, state.faq.selected, theme),
        body,
    );
}

fn faq_row(faq: &FaqItem) -> ContentRow {
    ContentRow {
        primary: faq.question.clone(),
        meta: format!("[{}] {}", faq.category, faq.answer),
        featured: faq.popular,
    }
}

fn render_press(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.press.visible();
    frame.render_widget(
        FilterBar::new(&state.press.filter, filter_active(state), view.len(), theme),
        filter_area,
    );

    if state.press.shows_empty_state() {
        frame.render_widget(
            EmptyState::new("No Press Releases", state.press.filter.is_active(), theme),
            body,
        );
        return;
    }

    let rows = view.iter().map(|r| press_row(r)).collect();
    frame.render_widget(
        ContentList::new("Press", rows, state.press.selected, theme),
        body,
    );
}

fn press_row(release: &PressRelease) -> ContentRow {
    ContentRow {
        primary: release.title.clone(),
        meta: format!("{} · {}", release.published_at, release.summary),
        featured: false,
    }
}

fn render_suppliers(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.suppliers.visible();
    frame.render_widget(
        FilterBar::new(
            &state.suppliers.list.filter,
            filter_active(state),
            view.len(),
            theme,
        ),
        filter_area,
    );

    if state.suppliers.list.loaded && view.is_empty() {
        let filtered = state.suppliers.list.filter.is_active() || state.suppliers.verified_only;
        frame.render_widget(EmptyState::new("No Suppliers Found", filtered, theme), body);
        return;
    }

    frame.render_widget(
        suppliers_table(&view, state.suppliers.list.selected, theme),
        body,
    );
}

fn render_notifications(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.notifications.visible();
    frame.render_widget(
        FilterBar::new(
            &state.notifications.filter,
            filter_active(state),
            view.len(),
            theme,
        ),
        filter_area,
    );

    if state.notifications.loaded && view.is_empty() {
        frame.render_widget(
            EmptyState::new(
                "No Notifications",
                state.notifications.filter.is_active(),
                theme,
            ),
            body,
        );
        return;
    }

    let rows = view.iter().map(|n| notification_row(n)).collect();
    let title = format!("Notifications ({} unread)", state.notifications.unread_count());
    frame.render_widget(
        ContentList::new(&title, rows, state.notifications.selected, theme),
        body,
    );
}

fn notification_row(n: &Notification) -> ContentRow {
    let dot = if n.is_read { "" } else { "• " };
    ContentRow {
        primary: format!("{dot}{}", n.title),
        meta: format!(
            "{} · {} · {}",
            n.kind.label(),
            n.priority.label(),
            n.message
        ),
        featured: false,
    }
}

fn render_admin_products(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.admin_products.visible();
    frame.render_widget(
        FilterBar::new(
            &state.admin_products.list.filter,
            filter_active(state),
            view.len(),
            theme,
        ),
        filter_area,
    );

    if state.admin_products.list.loaded && view.is_empty() {
        let filtered = state.admin_products.list.filter.is_active()
            || state.admin_products.status_filter.is_some();
        frame.render_widget(EmptyState::new("No Products Found", filtered, theme), body);
        return;
    }

    frame.render_widget(
        admin_products_table(&view, state.admin_products.list.selected, theme),
        body,
    );
}

fn render_buyers(frame: &mut Frame, state: &AppState, theme: Theme, area: Rect) {
    let (filter_area, body) = split_filtered(area);
    let view = state.buyers.visible();
    frame.render_widget(
        FilterBar::new(&state.buyers.filter, filter_active(state), view.len(), theme),
        filter_area,
    );

    if state.buyers.shows_empty_state() {
        frame.render_widget(
            EmptyState::new("No Buyers Found", state.buyers.filter.is_active(), theme),
            body,
        );
        return;
    }

    frame.render_widget(buyers_table(&view, state.buyers.selected, theme), body);
}
