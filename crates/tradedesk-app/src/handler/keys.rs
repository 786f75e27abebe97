//! Key event handlers for pages and overlays
//!
//! Overlays capture input first, then filter-input mode, then the normal
//! page keys. Handlers mutate state directly and return the follow-up
//! message/action for the loop.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::notifications::Activation;
use crate::search::SEARCH_LIMIT;
use crate::state::{AppState, InputMode, Overlay, Page};
use crate::wizards::{OtpLogin, OtpStep, PaymentField, QuoteField, QuoteWizard, UpgradeFlow, UpgradeStep};

use super::update::{admin_params, PAGE_LIMIT};
use super::{UpdateAction, UpdateResult};

/// Dispatch a key according to the current focus
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Ctrl+C always quits, regardless of focus
    if key == InputKey::CharCtrl('c') {
        return UpdateResult::message(Message::Quit);
    }

    match state.overlay {
        Some(Overlay::NotificationPanel) => notification_panel_key(state, key),
        Some(Overlay::QuoteWizard) => quote_key(state, key),
        Some(Overlay::UpgradeFlow) => upgrade_key(state, key),
        Some(Overlay::OtpLogin) => otp_key(state, key),
        None => match state.input_mode {
            InputMode::Filter => filter_input_key(state, key),
            InputMode::Normal => page_key(state, key),
        },
    }
}

// ─────────────────────────────────────────────────────────────────
// Normal page keys
// ─────────────────────────────────────────────────────────────────

fn page_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') => return UpdateResult::message(Message::Quit),
        InputKey::Char(c) if c.is_ascii_digit() => {
            if let Some(page) = Page::from_shortcut(c) {
                return UpdateResult::message(Message::Navigate(page));
            }
        }
        InputKey::Tab => return UpdateResult::message(Message::Navigate(state.page.next())),
        InputKey::BackTab => return UpdateResult::message(Message::Navigate(state.page.prev())),

        InputKey::Char('/') => {
            state.input_mode = InputMode::Filter;
        }

        InputKey::Char('n') => {
            state.overlay = Some(Overlay::NotificationPanel);
            if !state.notifications.loaded && !state.notifications.loading {
                state.notifications.begin_load();
                return UpdateResult::action(UpdateAction::LoadNotifications);
            }
        }

        InputKey::Char('l') => {
            if !state.signed_in {
                state.otp = Some(OtpLogin::new());
                state.overlay = Some(Overlay::OtpLogin);
            } else {
                state.status.info("Already signed in");
            }
        }

        InputKey::Char('u') => match next_tier(state) {
            Some(target) => {
                state.upgrade = Some(UpgradeFlow::new(state.plan, target, Default::default()));
                state.overlay = Some(Overlay::UpgradeFlow);
            }
            None => state.status.info("Already on the highest plan"),
        },

        InputKey::Char('r') => return refetch_current_page(state),
        InputKey::Char('c') => clear_current_filters(state),
        InputKey::Char('s') => cycle_current_sort(state),
        InputKey::Char('f') => cycle_current_category(state),

        InputKey::Up => select_prev(state),
        InputKey::Down => select_next(state),

        InputKey::Enter => return activate_selection(state),

        // Delete the selected admin row
        InputKey::Char('x') if state.page == Page::AdminProducts => {
            return admin_row_op(state, AdminOp::Delete)
        }

        // Toggle the verified-only view of the directory
        InputKey::Char('v') if state.page == Page::Suppliers => {
            state.suppliers.toggle_verified_only()
        }

        _ => {}
    }
    UpdateResult::none()
}

/// The plan one step above the current one, if any
fn next_tier(state: &AppState) -> Option<tradedesk_core::PlanTier> {
    use tradedesk_core::PlanTier;
    let i = PlanTier::ALL.iter().position(|t| *t == state.plan)?;
    PlanTier::ALL.get(i + 1).copied()
}

fn refetch_current_page(state: &mut AppState) -> UpdateResult {
    match state.page {
        Page::Blog => {
            state.blog.begin_load();
            UpdateResult::action(UpdateAction::LoadBlog)
        }
        Page::Faq => {
            state.faq.begin_load();
            UpdateResult::action(UpdateAction::LoadFaqs)
        }
        Page::Press => {
            state.press.begin_load();
            UpdateResult::action(UpdateAction::LoadPress)
        }
        Page::Suppliers => {
            state.suppliers.list.begin_load();
            UpdateResult::action(UpdateAction::LoadSuppliers {
                limit: PAGE_LIMIT,
                offset: 0,
            })
        }
        Page::AdminProducts => {
            state.admin_products.list.begin_load();
            UpdateResult::action(UpdateAction::LoadAdminProducts(admin_params(state)))
        }
        Page::AdminBuyers => {
            state.buyers.begin_load();
            UpdateResult::action(UpdateAction::LoadBuyers {
                limit: PAGE_LIMIT,
                offset: 0,
            })
        }
        Page::Dashboard => {
            state.dashboard.loading = true;
            UpdateResult::action(UpdateAction::LoadDashboard {
                days: super::update::DASHBOARD_DAYS,
                top_n: super::update::DASHBOARD_TOP_N,
            })
        }
        Page::Notifications => {
            state.notifications.begin_load();
            UpdateResult::action(UpdateAction::LoadNotifications)
        }
        Page::Search => UpdateResult::none(),
    }
}

fn clear_current_filters(state: &mut AppState) {
    match state.page {
        Page::Blog => state.blog.clear_filters(),
        Page::Faq => state.faq.clear_filters(),
        Page::Press => state.press.clear_filters(),
        Page::Suppliers => {
            state.suppliers.list.clear_filters();
            state.suppliers.verified_only = false;
        }
        Page::AdminProducts => {
            state.admin_products.list.clear_filters();
            state.admin_products.status_filter = None;
        }
        Page::AdminBuyers => state.buyers.clear_filters(),
        Page::Notifications => {
            state.notifications.filter.clear();
            state.notifications.selected = 0;
        }
        Page::Search => {
            state.search.filter.clear();
            state.search.selected = 0;
        }
        Page::Dashboard => {}
    }
}

fn cycle_current_sort(state: &mut AppState) {
    match state.page {
        Page::Blog => state.blog.cycle_sort(),
        Page::Press => state.press.cycle_sort(),
        Page::Suppliers => state.suppliers.list.cycle_sort(),
        Page::AdminProducts => state.admin_products.list.cycle_sort(),
        Page::AdminBuyers => state.buyers.cycle_sort(),
        Page::Search => state.search.cycle_sort(),
        _ => {}
    }
}

fn cycle_current_category(state: &mut AppState) {
    match state.page {
        Page::Blog => state.blog.cycle_category(),
        Page::Faq => state.faq.cycle_category(),
        Page::Press => state.press.cycle_category(),
        Page::Suppliers => state.suppliers.list.cycle_category(),
        Page::AdminProducts => state.admin_products.cycle_status_filter(),
        Page::Notifications => state.notifications.cycle_status_filter(),
        Page::Search => state.search.cycle_tab(),
        _ => {}
    }
}

fn select_prev(state: &mut AppState) {
    match state.page {
        Page::Blog => state.blog.select_prev(),
        Page::Faq => state.faq.select_prev(),
        Page::Press => state.press.select_prev(),
        Page::Suppliers => state.suppliers.select_prev(),
        Page::AdminProducts => state.admin_products.select_prev(),
        Page::AdminBuyers => state.buyers.select_prev(),
        Page::Notifications => state.notifications.select_prev(),
        Page::Search => state.search.select_prev(),
        Page::Dashboard => {}
    }
}

fn select_next(state: &mut AppState) {
    match state.page {
        Page::Blog => state.blog.select_next(),
        Page::Faq => state.faq.select_next(),
        Page::Press => state.press.select_next(),
        Page::Suppliers => state.suppliers.select_next(),
        Page::AdminProducts => state.admin_products.select_next(),
        Page::AdminBuyers => state.buyers.select_next(),
        Page::Notifications => state.notifications.select_next(),
        Page::Search => state.search.select_next(),
        Page::Dashboard => {}
    }
}

/// Enter on the current selection
fn activate_selection(state: &mut AppState) -> UpdateResult {
    match state.page {
        // A product hit opens the quote wizard prefilled from the hit
        Page::Search => {
            if let Some(hit) = state.search.selected_hit() {
                if hit.kind == tradedesk_core::HitKind::Product {
                    state.quote = Some(QuoteWizard::new(
                        hit.id.clone(),
                        hit.title.clone(),
                        None,
                        None,
                    ));
                    state.overlay = Some(Overlay::QuoteWizard);
                }
            }
            UpdateResult::none()
        }
        Page::Notifications => activate_notification(state),
        // Admin row operations use dedicated keys, handled below
        Page::AdminProducts => admin_row_op(state, AdminOp::CycleStatus),
        _ => UpdateResult::none(),
    }
}

enum AdminOp {
    CycleStatus,
    Delete,
}

/// Dispatch a moderation operation for the selected admin row
fn admin_row_op(state: &mut AppState, op: AdminOp) -> UpdateResult {
    if state.admin_products.mutating || state.admin_products.list.loading {
        return UpdateResult::none();
    }
    let Some(row) = state.admin_products.selected_row() else {
        return UpdateResult::none();
    };
    let id = row.id.clone();
    let action = match op {
        AdminOp::CycleStatus => {
            use tradedesk_core::ListingStatus;
            let i = ListingStatus::ALL
                .iter()
                .position(|s| *s == row.status)
                .unwrap_or(0);
            let next = ListingStatus::ALL[(i + 1) % ListingStatus::ALL.len()];
            UpdateAction::UpdateProductStatus {
                id,
                status: next,
                reason: None,
            }
        }
        AdminOp::Delete => UpdateAction::DeleteProduct { id },
    };
    state.admin_products.mutating = true;
    UpdateResult::action(action)
}

// ─────────────────────────────────────────────────────────────────
// Filter input mode ('/')
// ─────────────────────────────────────────────────────────────────

fn filter_input_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc => {
            state.input_mode = InputMode::Normal;
        }
        InputKey::Enter => {
            state.input_mode = InputMode::Normal;
            // On the search page, Enter submits the remote search; an empty
            // query clears results and dispatches nothing
            if state.page == Page::Search {
                if let Some(request) = state.search.submit() {
                    return UpdateResult::action(UpdateAction::Search {
                        seq: request.seq,
                        query: request.query,
                        limit: SEARCH_LIMIT,
                        offset: 0,
                    });
                }
            }
        }
        InputKey::Backspace => match state.page {
            Page::Blog => state.blog.pop_query_char(),
            Page::Faq => state.faq.pop_query_char(),
            Page::Press => state.press.pop_query_char(),
            Page::Suppliers => state.suppliers.list.pop_query_char(),
            Page::AdminProducts => state.admin_products.list.pop_query_char(),
            Page::AdminBuyers => state.buyers.pop_query_char(),
            Page::Notifications => {
                state.notifications.filter.pop_char();
                state.notifications.selected = 0;
            }
            Page::Search => {
                state.search.input.pop();
            }
            Page::Dashboard => {}
        },
        InputKey::Char(c) => match state.page {
            Page::Blog => state.blog.push_query_char(c),
            Page::Faq => state.faq.push_query_char(c),
            Page::Press => state.press.push_query_char(c),
            Page::Suppliers => state.suppliers.list.push_query_char(c),
            Page::AdminProducts => state.admin_products.list.push_query_char(c),
            Page::AdminBuyers => state.buyers.push_query_char(c),
            Page::Notifications => {
                state.notifications.filter.push_char(c);
                state.notifications.selected = 0;
            }
            Page::Search => state.search.input.push(c),
            Page::Dashboard => {}
        },
        _ => {}
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Notification panel overlay
// ─────────────────────────────────────────────────────────────────

fn notification_panel_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc | InputKey::Char('n') => {
            state.overlay = None;
            UpdateResult::none()
        }
        InputKey::Up => {
            state.notifications.select_prev();
            UpdateResult::none()
        }
        InputKey::Down => {
            state.notifications.select_next();
            UpdateResult::none()
        }
        InputKey::Char('a') => match state.notifications.mark_all() {
            Some(op) => {
                state.notifications.begin_mutation();
                UpdateResult::action(UpdateAction::NotificationMutation(op))
            }
            None => UpdateResult::none(),
        },
        InputKey::Char('d') => match state.notifications.delete_selected() {
            Some(op) => {
                state.notifications.begin_mutation();
                UpdateResult::action(UpdateAction::NotificationMutation(op))
            }
            None => UpdateResult::none(),
        },
        InputKey::Enter => {
            let result = activate_notification(state);
            // Following a link closes the panel
            if result.message.is_some() {
                state.overlay = None;
            }
            result
        }
        _ => UpdateResult::none(),
    }
}

/// Activate the selected notification: mark unread ones read, follow links
fn activate_notification(state: &mut AppState) -> UpdateResult {
    match state.notifications.activate_selected() {
        Some(Activation::MarkRead { op, action_url }) => {
            state.notifications.begin_mutation();
            UpdateResult {
                message: action_url
                    .as_deref()
                    .and_then(Page::from_action_url)
                    .map(Message::Navigate),
                action: Some(UpdateAction::NotificationMutation(op)),
            }
        }
        Some(Activation::Follow { action_url }) => UpdateResult {
            message: action_url
                .as_deref()
                .and_then(Page::from_action_url)
                .map(Message::Navigate),
            action: None,
        },
        None => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Quote wizard overlay
// ─────────────────────────────────────────────────────────────────

fn quote_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Some(quote) = state.quote.as_mut() else {
        state.overlay = None;
        return UpdateResult::none();
    };

    match key {
        InputKey::Esc => {
            // Closing is blocked mid-submission
            if !quote.is_submitting() {
                state.close_overlay();
            }
        }
        InputKey::Tab | InputKey::Down => quote.field = quote.field.next(),
        InputKey::BackTab | InputKey::Up => quote.field = quote.field.prev(),
        InputKey::Left => quote.select_left(),
        InputKey::Right => quote.select_right(),
        InputKey::Backspace => quote.pop_char(),
        InputKey::Enter => {
            if quote.field == QuoteField::Submit {
                if let Some(payload) = quote.begin_submit() {
                    return UpdateResult::action(UpdateAction::SubmitQuote(payload));
                }
            } else {
                quote.field = quote.field.next();
            }
        }
        InputKey::Char(c) => quote.push_char(c),
        _ => {}
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Upgrade flow overlay
// ─────────────────────────────────────────────────────────────────

fn upgrade_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Some(upgrade) = state.upgrade.as_mut() else {
        state.overlay = None;
        return UpdateResult::none();
    };

    match upgrade.step {
        UpgradeStep::Summary => match key {
            InputKey::Esc => state.close_overlay(),
            InputKey::Left | InputKey::Right | InputKey::Char('b') => upgrade.toggle_cycle(),
            InputKey::Enter => upgrade.proceed_to_payment(),
            _ => {}
        },
        UpgradeStep::Payment => match key {
            InputKey::Esc => {
                if !upgrade.processing {
                    state.close_overlay();
                }
            }
            InputKey::Tab | InputKey::Down => upgrade.field = upgrade.field.next(),
            InputKey::BackTab | InputKey::Up => upgrade.field = upgrade.field.prev(),
            InputKey::Backspace => upgrade.pop_char(),
            InputKey::Enter => {
                if upgrade.field == PaymentField::Pay {
                    if let Some((tier, cycle)) = upgrade.begin_payment() {
                        return UpdateResult::action(UpdateAction::SubmitUpgrade { tier, cycle });
                    }
                } else {
                    upgrade.field = upgrade.field.next();
                }
            }
            InputKey::Char(c) => upgrade.push_char(c),
            _ => {}
        },
        // Success closes itself via the tick countdown
        UpgradeStep::Success => {}
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// OTP login overlay
// ─────────────────────────────────────────────────────────────────

fn otp_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let Some(otp) = state.otp.as_mut() else {
        state.overlay = None;
        return UpdateResult::none();
    };

    match key {
        InputKey::Esc => {
            if !otp.is_busy() {
                state.close_overlay();
            }
        }
        InputKey::Left | InputKey::Right => otp.toggle_method(),
        InputKey::Backspace => otp.pop_char(),
        // Ctrl+R re-requests the code once the countdown allows it
        InputKey::CharCtrl('r') => {
            if let Some((method, address)) = otp.request_code() {
                return UpdateResult::action(UpdateAction::RequestOtp { method, address });
            }
        }
        InputKey::Enter => match otp.step {
            OtpStep::MethodSelect => {
                if let Some((method, address)) = otp.request_code() {
                    return UpdateResult::action(UpdateAction::RequestOtp { method, address });
                }
            }
            OtpStep::CodeSent => {
                if let Some((address, code)) = otp.begin_verify() {
                    return UpdateResult::action(UpdateAction::VerifyOtp { address, code });
                }
            }
            OtpStep::Verified => {}
        },
        InputKey::Char(c) => otp.push_char(c),
        _ => {}
    }
    UpdateResult::none()
}
