//! Update-loop tests: messages in, state transitions and actions out

use chrono::Utc;

use tradedesk_api::SearchResults;
use tradedesk_core::{
    BlogPost, HitKind, ListingStatus, Notification, NotificationKind, NotificationPriority,
    SearchHit,
};

use crate::input_key::InputKey;
use crate::message::{Message, NotificationOp};
use crate::state::{AppState, InputMode, Overlay, Page};
use crate::wizards::{QuoteStep, QuoteWizard};

use super::{update, UpdateAction, UpdateResult};

fn key(state: &mut AppState, k: InputKey) -> UpdateResult {
    update(state, Message::Key(k))
}

fn post(id: &str, title: &str, category: &str) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: String::new(),
        author_name: "A".to_string(),
        author_role: String::new(),
        category: category.to_string(),
        tags: vec![],
        published_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        read_time: 3,
        views: 7,
        likes: 1,
        featured: false,
    }
}

fn notification(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        kind: NotificationKind::System,
        priority: NotificationPriority::Low,
        title: id.to_string(),
        message: String::new(),
        is_read,
        action_url: None,
        created_at: Utc::now(),
    }
}

fn product_hit(id: &str) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        kind: HitKind::Product,
        title: format!("product {id}"),
        subtitle: None,
        price: Some(10.0),
        currency: Some("USD".to_string()),
        rating: None,
        verified: true,
    }
}

// ─────────────────────────────────────────────────────────────────
// Navigation and page loads
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_first_navigation_fetches_page_data() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Navigate(Page::Blog));
    assert_eq!(result.action, Some(UpdateAction::LoadBlog));
    assert!(state.blog.loading);

    // A second visit does not refetch
    update(&mut state, Message::BlogLoaded(Ok(vec![])));
    let result = update(&mut state, Message::Navigate(Page::Blog));
    assert_eq!(result.action, None);
}

#[test]
fn test_blog_empty_backend_renders_empty_state_and_clear_resets() {
    // Property 6, end to end: zero posts -> empty state; 'c' resets filters
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Page::Blog));
    update(&mut state, Message::BlogLoaded(Ok(vec![])));
    assert!(state.blog.shows_empty_state());

    state.blog.filter.query = "steel".to_string();
    state.blog.filter.category = "Trading".to_string();
    key(&mut state, InputKey::Char('c'));
    assert_eq!(state.blog.filter.query, "");
    assert!(tradedesk_core::query::is_all_sentinel(
        &state.blog.filter.category
    ));
}

#[test]
fn test_load_failure_degrades_to_empty_list() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Page::Blog));
    update(
        &mut state,
        Message::BlogLoaded(Err("HTTP 502".to_string())),
    );
    assert!(state.blog.items.is_empty());
    assert!(state.blog.shows_empty_state());
    assert!(!state.blog.loading);
}

#[test]
fn test_filter_mode_types_into_page_query() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Page::Blog));
    update(
        &mut state,
        Message::BlogLoaded(Ok(vec![
            post("1", "Steel markets", "Trading"),
            post("2", "Textile trends", "Textiles"),
        ])),
    );

    key(&mut state, InputKey::Char('/'));
    assert_eq!(state.input_mode, InputMode::Filter);
    for c in "steel".chars() {
        key(&mut state, InputKey::Char(c));
    }
    assert_eq!(state.blog.filter.query, "steel");
    assert_eq!(state.blog.visible_len(), 1);

    key(&mut state, InputKey::Esc);
    assert_eq!(state.input_mode, InputMode::Normal);
}

#[test]
fn test_digit_shortcut_navigates() {
    let mut state = AppState::new();
    let result = key(&mut state, InputKey::Char('2'));
    assert!(matches!(result.message, Some(Message::Navigate(Page::Blog))));
}

// ─────────────────────────────────────────────────────────────────
// Notifications: unified store, read-through refetch
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_panel_and_page_share_one_store() {
    let mut state = AppState::new();
    // Opening the header panel triggers the real fetch
    let result = key(&mut state, InputKey::Char('n'));
    assert_eq!(result.action, Some(UpdateAction::LoadNotifications));
    assert_eq!(state.overlay, Some(Overlay::NotificationPanel));

    update(
        &mut state,
        Message::NotificationsLoaded(Ok(vec![
            notification("n1", false),
            notification("n2", true),
        ])),
    );

    // The page sees the same data without another fetch
    key(&mut state, InputKey::Esc);
    let result = update(&mut state, Message::Navigate(Page::Notifications));
    assert_eq!(result.action, None);
    assert_eq!(state.notifications.unread_count(), 1);
}

#[test]
fn test_successful_mutation_triggers_exactly_one_refetch() {
    let mut state = AppState::new();
    state
        .notifications
        .set_items(vec![notification("n1", false)]);

    let result = update(
        &mut state,
        Message::NotificationMutationDone {
            op: NotificationOp::MarkRead("n1".to_string()),
            outcome: Ok(()),
        },
    );
    assert_eq!(result.action, Some(UpdateAction::LoadNotifications));
    assert!(state.notifications.loading);
}

#[test]
fn test_failed_mutation_surfaces_status_error_without_refetch() {
    let mut state = AppState::new();
    state
        .notifications
        .set_items(vec![notification("n1", false)]);
    state.notifications.begin_mutation();

    let result = update(
        &mut state,
        Message::NotificationMutationDone {
            op: NotificationOp::MarkAllRead,
            outcome: Err("HTTP 500".to_string()),
        },
    );
    assert_eq!(result.action, None);
    assert!(!state.notifications.mutating);
    assert!(state.status.is_error);
}

#[test]
fn test_panel_enter_marks_unread_read_and_navigates() {
    let mut state = AppState::new();
    let mut n = notification("n1", false);
    n.action_url = Some("/admin/products".to_string());
    state.notifications.set_items(vec![n]);
    state.overlay = Some(Overlay::NotificationPanel);

    let result = key(&mut state, InputKey::Enter);
    assert_eq!(
        result.action,
        Some(UpdateAction::NotificationMutation(NotificationOp::MarkRead(
            "n1".to_string()
        )))
    );
    assert!(matches!(
        result.message,
        Some(Message::Navigate(Page::AdminProducts))
    ));
    assert!(state.notifications.mutating);
}

// ─────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────

fn submit_search(state: &mut AppState, text: &str) -> UpdateResult {
    update(state, Message::Navigate(Page::Search));
    key(state, InputKey::Char('/'));
    state.search.input = text.to_string();
    key(state, InputKey::Enter)
}

#[test]
fn test_empty_search_dispatches_nothing() {
    // Property 8 end to end
    let mut state = AppState::new();
    let result = submit_search(&mut state, "");
    assert_eq!(result.action, None);
    assert_eq!(state.search.visible_len(), 0);
    assert!(!state.search.loading);
}

#[test]
fn test_search_dispatch_and_stale_discard() {
    let mut state = AppState::new();
    let first = submit_search(&mut state, "ste");
    let Some(UpdateAction::Search { seq: seq1, .. }) = first.action else {
        panic!("expected search action");
    };

    state.input_mode = InputMode::Normal;
    let second = submit_search(&mut state, "steel");
    let Some(UpdateAction::Search { seq: seq2, query, .. }) = second.action else {
        panic!("expected search action");
    };
    assert_eq!(query, "steel");
    assert!(seq2 > seq1);

    // Newer response lands first
    update(
        &mut state,
        Message::SearchCompleted {
            seq: seq2,
            outcome: Ok(SearchResults {
                hits: vec![product_hit("new")],
                total: 1,
            }),
        },
    );
    // Stale response must not overwrite it
    update(
        &mut state,
        Message::SearchCompleted {
            seq: seq1,
            outcome: Ok(SearchResults {
                hits: vec![product_hit("old")],
                total: 1,
            }),
        },
    );
    assert_eq!(state.search.visible()[0].id, "new");
}

#[test]
fn test_search_failure_clears_results_only() {
    let mut state = AppState::new();
    let result = submit_search(&mut state, "steel");
    let Some(UpdateAction::Search { seq, .. }) = result.action else {
        panic!("expected search action");
    };
    update(
        &mut state,
        Message::SearchCompleted {
            seq,
            outcome: Err("timeout".to_string()),
        },
    );
    assert_eq!(state.search.visible_len(), 0);
    assert!(!state.search.loading);
    // No user-facing error beyond the zero count
    assert!(!state.status.is_error);
}

#[test]
fn test_enter_on_product_hit_opens_quote_wizard() {
    let mut state = AppState::new();
    let result = submit_search(&mut state, "steel");
    let Some(UpdateAction::Search { seq, .. }) = result.action else {
        panic!("expected search action");
    };
    update(
        &mut state,
        Message::SearchCompleted {
            seq,
            outcome: Ok(SearchResults {
                hits: vec![product_hit("prod-7")],
                total: 1,
            }),
        },
    );

    key(&mut state, InputKey::Enter);
    assert_eq!(state.overlay, Some(Overlay::QuoteWizard));
    assert_eq!(state.quote.as_ref().unwrap().product_id, "prod-7");
}

// ─────────────────────────────────────────────────────────────────
// Quote wizard through the loop
// ─────────────────────────────────────────────────────────────────

fn open_quote(state: &mut AppState) {
    state.quote = Some(QuoteWizard::new(
        "prod-1",
        "Steel pipe",
        Some("sup-1".to_string()),
        Some(100),
    ));
    state.overlay = Some(Overlay::QuoteWizard);
}

#[test]
fn test_invalid_quantity_never_reaches_the_wire() {
    // Property 7 end to end: "0abc" -> no SubmitQuote action
    let mut state = AppState::new();
    open_quote(&mut state);
    let quote = state.quote.as_mut().unwrap();
    quote.quantity = "0abc".to_string();
    quote.field = crate::wizards::QuoteField::Submit;

    let result = key(&mut state, InputKey::Enter);
    assert_eq!(result.action, None);
    let quote = state.quote.as_ref().unwrap();
    assert_eq!(quote.step, QuoteStep::Form);
    assert!(quote.error.is_some());
}

#[test]
fn test_quote_submit_success_closes_after_delay() {
    let mut state = AppState::new();
    open_quote(&mut state);
    state.quote.as_mut().unwrap().field = crate::wizards::QuoteField::Submit;

    let result = key(&mut state, InputKey::Enter);
    assert!(matches!(result.action, Some(UpdateAction::SubmitQuote(_))));
    assert!(state.quote.as_ref().unwrap().is_submitting());

    // Esc is ignored while the call is in flight
    key(&mut state, InputKey::Esc);
    assert_eq!(state.overlay, Some(Overlay::QuoteWizard));

    update(&mut state, Message::QuoteSubmitted(Ok("rfq-9".to_string())));
    assert_eq!(state.quote.as_ref().unwrap().step, QuoteStep::Done);

    // Fixed-delay auto-close
    for _ in 0..crate::wizards::AUTO_CLOSE_TICKS {
        update(&mut state, Message::Tick);
    }
    assert_eq!(state.overlay, None);
    assert!(state.quote.is_none());
    assert!(state.status.text.contains("rfq-9"));
}

#[test]
fn test_quote_submit_failure_stays_open_with_error() {
    let mut state = AppState::new();
    open_quote(&mut state);
    state.quote.as_mut().unwrap().field = crate::wizards::QuoteField::Submit;
    key(&mut state, InputKey::Enter);

    update(
        &mut state,
        Message::QuoteSubmitted(Err("supplier unavailable".to_string())),
    );
    let quote = state.quote.as_ref().unwrap();
    assert_eq!(quote.step, QuoteStep::Form);
    assert_eq!(quote.error.as_deref(), Some("supplier unavailable"));
    assert_eq!(state.overlay, Some(Overlay::QuoteWizard));
}

// ─────────────────────────────────────────────────────────────────
// Upgrade flow and sign-in through the loop
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_upgrade_success_updates_plan_and_closes() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('u'));
    assert_eq!(state.overlay, Some(Overlay::UpgradeFlow));

    // Summary -> Payment
    key(&mut state, InputKey::Enter);
    {
        let upgrade = state.upgrade.as_mut().unwrap();
        upgrade.card_number = "4111 1111 1111 1111".to_string();
        upgrade.expiry = "11/26".to_string();
        upgrade.cvc = "321".to_string();
        upgrade.field = crate::wizards::PaymentField::Pay;
    }
    let result = key(&mut state, InputKey::Enter);
    assert!(matches!(
        result.action,
        Some(UpdateAction::SubmitUpgrade { .. })
    ));

    update(&mut state, Message::UpgradeCompleted(Ok(())));
    assert_eq!(state.plan, tradedesk_core::PlanTier::Silver);

    for _ in 0..crate::wizards::AUTO_CLOSE_TICKS {
        update(&mut state, Message::Tick);
    }
    assert_eq!(state.overlay, None);
}

#[test]
fn test_otp_flow_signs_in() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    assert_eq!(state.overlay, Some(Overlay::OtpLogin));

    for c in "buyer@example.com".chars() {
        key(&mut state, InputKey::Char(c));
    }
    let result = key(&mut state, InputKey::Enter);
    assert!(matches!(result.action, Some(UpdateAction::RequestOtp { .. })));

    update(&mut state, Message::OtpRequested(Ok(())));
    for c in "123456".chars() {
        key(&mut state, InputKey::Char(c));
    }
    let result = key(&mut state, InputKey::Enter);
    assert!(matches!(result.action, Some(UpdateAction::VerifyOtp { .. })));

    update(&mut state, Message::OtpVerified(Ok(())));
    assert!(state.signed_in);
}

#[test]
fn test_otp_wrong_code_stays_on_step() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Char('l'));
    for c in "buyer@example.com".chars() {
        key(&mut state, InputKey::Char(c));
    }
    key(&mut state, InputKey::Enter);
    update(&mut state, Message::OtpRequested(Ok(())));
    for c in "999999".chars() {
        key(&mut state, InputKey::Char(c));
    }
    key(&mut state, InputKey::Enter);

    update(
        &mut state,
        Message::OtpVerified(Err("invalid code".to_string())),
    );
    assert!(!state.signed_in);
    let otp = state.otp.as_ref().unwrap();
    assert_eq!(otp.step, crate::wizards::OtpStep::CodeSent);
    assert_eq!(otp.error.as_deref(), Some("invalid code"));
}

// ─────────────────────────────────────────────────────────────────
// Admin operations
// ─────────────────────────────────────────────────────────────────

fn admin_row(id: &str, status: ListingStatus) -> tradedesk_core::AdminProduct {
    tradedesk_core::AdminProduct {
        id: id.to_string(),
        name: id.to_string(),
        category_name: "Metals".to_string(),
        supplier_name: "Acme".to_string(),
        price: 5.0,
        currency: "USD".to_string(),
        stock: 1,
        status,
        views: 0,
        orders: 0,
        rating: 0.0,
        created_at: Utc::now(),
    }
}

#[test]
fn test_admin_status_cycle_dispatches_and_refetches() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Page::AdminProducts));
    update(
        &mut state,
        Message::AdminProductsLoaded(Ok(vec![admin_row("prod-1", ListingStatus::Pending)])),
    );

    let result = key(&mut state, InputKey::Enter);
    assert_eq!(
        result.action,
        Some(UpdateAction::UpdateProductStatus {
            id: "prod-1".to_string(),
            status: ListingStatus::Rejected,
            reason: None,
        })
    );
    assert!(state.admin_products.mutating);

    // While in flight, further row ops are ignored
    let result = key(&mut state, InputKey::Char('x'));
    assert_eq!(result.action, None);

    // Completion refetches the table
    let result = update(
        &mut state,
        Message::ProductStatusUpdated {
            id: "prod-1".to_string(),
            outcome: Ok(()),
        },
    );
    assert!(matches!(
        result.action,
        Some(UpdateAction::LoadAdminProducts(_))
    ));
}

#[test]
fn test_admin_delete_dispatches() {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(Page::AdminProducts));
    update(
        &mut state,
        Message::AdminProductsLoaded(Ok(vec![admin_row("prod-2", ListingStatus::Active)])),
    );

    let result = key(&mut state, InputKey::Char('x'));
    assert_eq!(
        result.action,
        Some(UpdateAction::DeleteProduct {
            id: "prod-2".to_string()
        })
    );
}

#[test]
fn test_quit_keys() {
    let mut state = AppState::new();
    let result = key(&mut state, InputKey::Char('q'));
    assert!(matches!(result.message, Some(Message::Quit)));
    update(&mut state, Message::Quit);
    assert!(state.should_quit());

    let mut state = AppState::new();
    let result = key(&mut state, InputKey::CharCtrl('c'));
    assert!(matches!(result.message, Some(Message::Quit)));
}
