//! Message processing and action dispatch
//!
//! `process_message` drives the TEA loop: it feeds a message (and any
//! follow-ups) through `update()` and hands resulting actions to
//! `handle_action`, which spawns one tokio task per remote call. Tasks own
//! a clone of the API handle and report back by sending a completion
//! `Message` on the channel; nothing blocks the update loop.

use tokio::sync::mpsc;

use tradedesk_api::MarketplaceApi;
use tradedesk_core::prelude::*;

use crate::handler::{self, UpdateAction};
use crate::message::{Loaded, Message, NotificationOp};
use crate::notifications::FETCH_LIMIT;
use crate::state::AppState;

/// Process a message through the TEA update function, dispatching actions
pub fn process_message<M>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &M,
) where
    M: MarketplaceApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api.clone(), msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Log a failed remote call and keep its user-facing message
fn degrade<T>(context: &'static str, result: Result<T>) -> Loaded<T> {
    result.map_err(|err| {
        error!("{context}: {err}");
        err.user_message()
    })
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        warn!("message channel closed, dropping completion");
    }
}

/// Spawn the remote call for one action
pub fn handle_action<M>(action: UpdateAction, api: M, msg_tx: mpsc::Sender<Message>)
where
    M: MarketplaceApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadBlog => {
            tokio::spawn(async move {
                let outcome = degrade("blog fetch", api.blog_posts().await);
                send(&msg_tx, Message::BlogLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadFaqs => {
            tokio::spawn(async move {
                let outcome = degrade("faq fetch", api.faqs().await);
                send(&msg_tx, Message::FaqsLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadPress => {
            tokio::spawn(async move {
                let outcome = degrade("press fetch", api.press_releases().await);
                send(&msg_tx, Message::PressLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadSuppliers { limit, offset } => {
            tokio::spawn(async move {
                let outcome = degrade("supplier fetch", api.list_suppliers(limit, offset).await);
                send(&msg_tx, Message::SuppliersLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadAdminProducts(params) => {
            tokio::spawn(async move {
                let outcome = degrade("admin products fetch", api.admin_products(params).await);
                send(&msg_tx, Message::AdminProductsLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadBuyers { limit, offset } => {
            tokio::spawn(async move {
                let outcome = degrade("buyer fetch", api.list_buyers(limit, offset).await);
                send(&msg_tx, Message::BuyersLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadDashboard { days, top_n } => {
            // Three independent stat endpoints, fetched concurrently
            let sales_api = api.clone();
            let sales_tx = msg_tx.clone();
            tokio::spawn(async move {
                let outcome = degrade("sales data fetch", sales_api.sales_data(days).await);
                send(&sales_tx, Message::SalesDataLoaded(outcome)).await;
            });

            let cats_api = api.clone();
            let cats_tx = msg_tx.clone();
            tokio::spawn(async move {
                let outcome = degrade("category stats fetch", cats_api.category_stats().await);
                send(&cats_tx, Message::CategoryStatsLoaded(outcome)).await;
            });

            tokio::spawn(async move {
                let outcome = degrade("top products fetch", api.top_products(top_n).await);
                send(&msg_tx, Message::TopProductsLoaded(outcome)).await;
            });
        }

        UpdateAction::LoadNotifications => {
            tokio::spawn(async move {
                let outcome = degrade(
                    "notification fetch",
                    api.my_notifications(FETCH_LIMIT, 0).await,
                );
                send(&msg_tx, Message::NotificationsLoaded(outcome)).await;
            });
        }

        UpdateAction::NotificationMutation(op) => {
            tokio::spawn(async move {
                let call = match &op {
                    NotificationOp::MarkRead(id) => {
                        api.mark_notification_read(id.clone()).await
                    }
                    NotificationOp::MarkAllRead => api.mark_all_notifications_read().await,
                    NotificationOp::Delete(id) => api.delete_notification(id.clone()).await,
                };
                let outcome = degrade("notification mutation", call);
                send(&msg_tx, Message::NotificationMutationDone { op, outcome }).await;
            });
        }

        UpdateAction::Search {
            seq,
            query,
            limit,
            offset,
        } => {
            tokio::spawn(async move {
                let outcome = degrade("search", api.search(query, limit, offset).await);
                send(&msg_tx, Message::SearchCompleted { seq, outcome }).await;
            });
        }

        UpdateAction::SubmitQuote(payload) => {
            tokio::spawn(async move {
                let outcome = degrade("rfq create", api.create_rfq(payload).await);
                send(&msg_tx, Message::QuoteSubmitted(outcome.map(|rfq| rfq.id))).await;
            });
        }

        UpdateAction::SubmitUpgrade { tier, cycle } => {
            tokio::spawn(async move {
                let outcome = degrade(
                    "subscription upgrade",
                    api.upgrade_subscription(tier, cycle).await,
                );
                send(&msg_tx, Message::UpgradeCompleted(outcome)).await;
            });
        }

        UpdateAction::RequestOtp { method, address } => {
            tokio::spawn(async move {
                let outcome = degrade("otp request", api.request_otp(method, address).await);
                send(&msg_tx, Message::OtpRequested(outcome)).await;
            });
        }

        UpdateAction::VerifyOtp { address, code } => {
            tokio::spawn(async move {
                let outcome = degrade("otp verify", api.verify_otp(address, code).await);
                send(&msg_tx, Message::OtpVerified(outcome)).await;
            });
        }

        UpdateAction::UpdateProductStatus { id, status, reason } => {
            tokio::spawn(async move {
                let outcome = degrade(
                    "product status update",
                    api.update_product_status(id.clone(), status, reason).await,
                );
                send(&msg_tx, Message::ProductStatusUpdated { id, outcome }).await;
            });
        }

        UpdateAction::DeleteProduct { id } => {
            tokio::spawn(async move {
                let outcome = degrade("product delete", api.delete_product(id.clone()).await);
                send(&msg_tx, Message::ProductDeleted { id, outcome }).await;
            });
        }
    }
}
