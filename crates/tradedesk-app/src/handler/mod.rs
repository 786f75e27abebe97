//! Handler module - TEA update function and key handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for pages and overlays

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use tradedesk_api::AdminProductParams;
use tradedesk_core::{BillingCycle, CreateRfq, ListingStatus, OtpMethod, PlanTier};

use crate::message::{Message, NotificationOp};

// Re-export main entry point
pub use update::update;

/// Actions the event loop should perform after update
///
/// Each variant dispatches exactly one remote call (`LoadDashboard` fans
/// out to its three stat endpoints); completion arrives as a [`Message`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    // Page loads
    LoadBlog,
    LoadFaqs,
    LoadPress,
    LoadSuppliers {
        limit: u32,
        offset: u32,
    },
    LoadAdminProducts(AdminProductParams),
    LoadBuyers {
        limit: u32,
        offset: u32,
    },
    /// Fetch the three dashboard stat sets concurrently
    LoadDashboard {
        days: u32,
        top_n: u32,
    },
    LoadNotifications,

    /// One notification mutation; the Ok completion triggers a refetch
    NotificationMutation(NotificationOp),

    /// Sequence-numbered search request (latest response wins)
    Search {
        seq: u64,
        query: String,
        limit: u32,
        offset: u32,
    },

    // Wizard submissions
    SubmitQuote(CreateRfq),
    SubmitUpgrade {
        tier: PlanTier,
        cycle: BillingCycle,
    },
    RequestOtp {
        method: OtpMethod,
        address: String,
    },
    VerifyOtp {
        address: String,
        code: String,
    },

    // Admin row operations
    UpdateProductStatus {
        id: String,
        status: ListingStatus,
        reason: Option<String>,
    },
    DeleteProduct {
        id: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
