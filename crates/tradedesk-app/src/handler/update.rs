//! Main update function - handles state transitions (TEA pattern)

use tracing::warn;

use tradedesk_api::AdminProductParams;

use crate::message::Message;
use crate::state::{AppState, Page};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Default page size for table fetches
pub const PAGE_LIMIT: u32 = 50;

/// Days of sales history on the dashboard
pub const DASHBOARD_DAYS: u32 = 30;

/// Rows in the dashboard top-products pane
pub const DASHBOARD_TOP_N: u32 = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => handle_key(state, key),

        Message::Navigate(page) => navigate(state, page),

        Message::Tick => handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Page Data Loaded
        // ─────────────────────────────────────────────────────────
        Message::BlogLoaded(Ok(mut items)) => {
            // Featured posts surface first, source order otherwise
            items.sort_by_key(|post| !post.featured);
            state.blog.set_items(items);
            UpdateResult::none()
        }
        Message::BlogLoaded(Err(e)) => {
            warn!("blog load failed: {e}");
            state.blog.set_error(e);
            UpdateResult::none()
        }

        Message::FaqsLoaded(Ok(items)) => {
            state.faq.set_items(items);
            UpdateResult::none()
        }
        Message::FaqsLoaded(Err(e)) => {
            warn!("faq load failed: {e}");
            state.faq.set_error(e);
            UpdateResult::none()
        }

        Message::PressLoaded(Ok(items)) => {
            state.press.set_items(items);
            UpdateResult::none()
        }
        Message::PressLoaded(Err(e)) => {
            warn!("press load failed: {e}");
            state.press.set_error(e);
            UpdateResult::none()
        }

        Message::SuppliersLoaded(Ok(items)) => {
            state.suppliers.list.set_items(items);
            UpdateResult::none()
        }
        Message::SuppliersLoaded(Err(e)) => {
            warn!("supplier load failed: {e}");
            state.suppliers.list.set_error(e);
            UpdateResult::none()
        }

        Message::AdminProductsLoaded(Ok(items)) => {
            state.admin_products.list.set_items(items);
            state.admin_products.mutating = false;
            UpdateResult::none()
        }
        Message::AdminProductsLoaded(Err(e)) => {
            warn!("admin products load failed: {e}");
            state.admin_products.list.set_error(e);
            state.admin_products.mutating = false;
            UpdateResult::none()
        }

        Message::BuyersLoaded(Ok(items)) => {
            state.buyers.set_items(items);
            UpdateResult::none()
        }
        Message::BuyersLoaded(Err(e)) => {
            warn!("buyer load failed: {e}");
            state.buyers.set_error(e);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard Stats
        // ─────────────────────────────────────────────────────────
        Message::SalesDataLoaded(outcome) => {
            state.dashboard.loading = false;
            state.dashboard.loaded = true;
            match outcome {
                Ok(points) => state.dashboard.sales = points,
                Err(e) => {
                    warn!("sales data load failed: {e}");
                    state.dashboard.sales.clear();
                }
            }
            UpdateResult::none()
        }
        Message::CategoryStatsLoaded(outcome) => {
            match outcome {
                Ok(stats) => state.dashboard.categories = stats,
                Err(e) => {
                    warn!("category stats load failed: {e}");
                    state.dashboard.categories.clear();
                }
            }
            UpdateResult::none()
        }
        Message::TopProductsLoaded(outcome) => {
            match outcome {
                Ok(rows) => state.dashboard.top_products = rows,
                Err(e) => {
                    warn!("top products load failed: {e}");
                    state.dashboard.top_products.clear();
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::NotificationsLoaded(Ok(items)) => {
            state.notifications.set_items(items);
            UpdateResult::none()
        }
        Message::NotificationsLoaded(Err(e)) => {
            warn!("notification load failed: {e}");
            state.notifications.set_error(e);
            UpdateResult::none()
        }

        Message::NotificationMutationDone { op, outcome } => match outcome {
            // Read-through cache: every successful mutation is followed by
            // exactly one refetch
            Ok(()) => {
                state.notifications.begin_load();
                UpdateResult::action(UpdateAction::LoadNotifications)
            }
            Err(e) => {
                warn!("notification mutation {op:?} failed: {e}");
                state.notifications.mutating = false;
                state.status.error(e);
                UpdateResult::none()
            }
        },

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::SearchCompleted { seq, outcome } => {
            match outcome {
                Ok(results) => {
                    state.search.accept(seq, results);
                }
                Err(e) => {
                    // Log-only degradation; the count renders 0
                    warn!("search failed: {e}");
                    state.search.fail(seq);
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Wizard Submissions
        // ─────────────────────────────────────────────────────────
        Message::QuoteSubmitted(outcome) => {
            if let Some(quote) = state.quote.as_mut() {
                match outcome {
                    Ok(id) => quote.submit_succeeded(id),
                    Err(e) => quote.submit_failed(e),
                }
            }
            UpdateResult::none()
        }

        Message::UpgradeCompleted(outcome) => {
            if let Some(upgrade) = state.upgrade.as_mut() {
                match outcome {
                    Ok(()) => {
                        state.plan = upgrade.target;
                        upgrade.payment_succeeded();
                    }
                    Err(e) => upgrade.payment_failed(e),
                }
            }
            UpdateResult::none()
        }

        Message::OtpRequested(outcome) => {
            if let Some(otp) = state.otp.as_mut() {
                match outcome {
                    Ok(()) => otp.code_sent(),
                    Err(e) => otp.send_failed(e),
                }
            }
            UpdateResult::none()
        }

        Message::OtpVerified(outcome) => {
            if let Some(otp) = state.otp.as_mut() {
                match outcome {
                    Ok(()) => {
                        state.signed_in = true;
                        otp.verified();
                    }
                    Err(e) => otp.verify_failed(e),
                }
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Admin Operations
        // ─────────────────────────────────────────────────────────
        Message::ProductStatusUpdated { id, outcome } => match outcome {
            Ok(()) => {
                state.status.info(format!("Updated status of {id}"));
                state.admin_products.list.begin_load();
                UpdateResult::action(UpdateAction::LoadAdminProducts(admin_params(state)))
            }
            Err(e) => {
                warn!("status update for {id} failed: {e}");
                state.admin_products.mutating = false;
                state.status.error(e);
                UpdateResult::none()
            }
        },

        Message::ProductDeleted { id, outcome } => match outcome {
            Ok(()) => {
                state.status.info(format!("Deleted {id}"));
                state.admin_products.list.begin_load();
                UpdateResult::action(UpdateAction::LoadAdminProducts(admin_params(state)))
            }
            Err(e) => {
                warn!("delete of {id} failed: {e}");
                state.admin_products.mutating = false;
                state.status.error(e);
                UpdateResult::none()
            }
        },
    }
}

/// Switch pages, fetching the target's data on first entry
fn navigate(state: &mut AppState, page: Page) -> UpdateResult {
    state.page = page;
    state.input_mode = crate::state::InputMode::Normal;

    match page {
        Page::Blog if !state.blog.loaded && !state.blog.loading => {
            state.blog.begin_load();
            UpdateResult::action(UpdateAction::LoadBlog)
        }
        Page::Faq if !state.faq.loaded && !state.faq.loading => {
            state.faq.begin_load();
            UpdateResult::action(UpdateAction::LoadFaqs)
        }
        Page::Press if !state.press.loaded && !state.press.loading => {
            state.press.begin_load();
            UpdateResult::action(UpdateAction::LoadPress)
        }
        Page::Suppliers if !state.suppliers.list.loaded && !state.suppliers.list.loading => {
            state.suppliers.list.begin_load();
            UpdateResult::action(UpdateAction::LoadSuppliers {
                limit: PAGE_LIMIT,
                offset: 0,
            })
        }
        Page::AdminProducts
            if !state.admin_products.list.loaded && !state.admin_products.list.loading =>
        {
            state.admin_products.list.begin_load();
            UpdateResult::action(UpdateAction::LoadAdminProducts(admin_params(state)))
        }
        Page::AdminBuyers if !state.buyers.loaded && !state.buyers.loading => {
            state.buyers.begin_load();
            UpdateResult::action(UpdateAction::LoadBuyers {
                limit: PAGE_LIMIT,
                offset: 0,
            })
        }
        Page::Dashboard if !state.dashboard.loaded && !state.dashboard.loading => {
            state.dashboard.loading = true;
            UpdateResult::action(UpdateAction::LoadDashboard {
                days: DASHBOARD_DAYS,
                top_n: DASHBOARD_TOP_N,
            })
        }
        Page::Notifications if !state.notifications.loaded && !state.notifications.loading => {
            state.notifications.begin_load();
            UpdateResult::action(UpdateAction::LoadNotifications)
        }
        _ => UpdateResult::none(),
    }
}

/// Advance countdowns: status line, wizard auto-close, OTP resend timer
fn handle_tick(state: &mut AppState) -> UpdateResult {
    state.status.tick();

    if let Some(quote) = state.quote.as_mut() {
        if quote.tick() {
            let id = quote.created_id.clone().unwrap_or_default();
            state.close_overlay();
            state.status.info(format!("Quote request {id} submitted"));
        }
    }

    if let Some(upgrade) = state.upgrade.as_mut() {
        if upgrade.tick() {
            let tier = upgrade.target;
            state.close_overlay();
            state.status.info(format!("Upgraded to {}", tier.label()));
        }
    }

    if let Some(otp) = state.otp.as_mut() {
        if otp.tick() {
            state.close_overlay();
            state.status.info("Signed in");
        }
    }

    UpdateResult::none()
}

/// Fetch parameters for the admin products table, preserving the current
/// status filter server-side
pub(super) fn admin_params(state: &AppState) -> AdminProductParams {
    AdminProductParams {
        limit: PAGE_LIMIT,
        offset: 0,
        status: state.admin_products.status_filter,
    }
}
