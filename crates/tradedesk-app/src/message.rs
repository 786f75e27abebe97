//! Message types for the application (TEA pattern)

use tradedesk_api::SearchResults;
use tradedesk_core::{
    AdminProduct, BlogPost, Buyer, CategoryStat, FaqItem, Notification, PressRelease, SalesPoint,
    Supplier, TopProduct,
};

use crate::input_key::InputKey;
use crate::state::Page;

/// Remote outcomes carried by messages
///
/// Errors arrive as display strings: the spawning task has already logged
/// the full error, the update loop only needs something to degrade with.
pub type Loaded<T> = Result<T, String>;

/// A notification mutation the panel can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOp {
    MarkRead(String),
    MarkAllRead,
    Delete(String),
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for countdowns and auto-advance timers (250ms)
    Tick,

    /// Quit immediately (Ctrl+C, signal handler, 'q')
    Quit,

    /// Switch to a page
    Navigate(Page),

    // ─────────────────────────────────────────────────────────
    // Page Data Loaded
    // ─────────────────────────────────────────────────────────
    BlogLoaded(Loaded<Vec<BlogPost>>),
    FaqsLoaded(Loaded<Vec<FaqItem>>),
    PressLoaded(Loaded<Vec<PressRelease>>),
    SuppliersLoaded(Loaded<Vec<Supplier>>),
    AdminProductsLoaded(Loaded<Vec<AdminProduct>>),
    BuyersLoaded(Loaded<Vec<Buyer>>),

    // ─────────────────────────────────────────────────────────
    // Dashboard Stats
    // ─────────────────────────────────────────────────────────
    SalesDataLoaded(Loaded<Vec<SalesPoint>>),
    CategoryStatsLoaded(Loaded<Vec<CategoryStat>>),
    TopProductsLoaded(Loaded<Vec<TopProduct>>),

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    NotificationsLoaded(Loaded<Vec<Notification>>),
    /// A mark-read/mark-all/delete call finished; Ok triggers the refetch
    NotificationMutationDone {
        op: NotificationOp,
        outcome: Loaded<()>,
    },

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    /// A search response arrived; `seq` identifies the request so stale
    /// responses can be discarded (latest request wins)
    SearchCompleted {
        seq: u64,
        outcome: Loaded<SearchResults>,
    },

    // ─────────────────────────────────────────────────────────
    // Wizard Submissions
    // ─────────────────────────────────────────────────────────
    /// RFQ creation finished; Ok carries the created id
    QuoteSubmitted(Loaded<String>),
    UpgradeCompleted(Loaded<()>),
    OtpRequested(Loaded<()>),
    OtpVerified(Loaded<()>),

    // ─────────────────────────────────────────────────────────
    // Admin Operations
    // ─────────────────────────────────────────────────────────
    ProductStatusUpdated {
        id: String,
        outcome: Loaded<()>,
    },
    ProductDeleted {
        id: String,
        outcome: Loaded<()>,
    },
}
