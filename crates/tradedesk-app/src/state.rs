//! Application state (Model in TEA pattern)

use tradedesk_core::{
    AdminProduct, BlogPost, Buyer, CategoryStat, FaqItem, ListingStatus, PlanTier, PressRelease,
    SalesPoint, Supplier, TopProduct,
};

use crate::list_page::ListPage;
use crate::notifications::NotificationStore;
use crate::search::SearchState;
use crate::wizards::{OtpLogin, QuoteWizard, UpgradeFlow};

/// Current page/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Back-office dashboard: sales, categories, top products
    #[default]
    Dashboard,
    Blog,
    Faq,
    Press,
    Suppliers,
    Search,
    Notifications,
    AdminProducts,
    AdminBuyers,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Blog => "Blog",
            Page::Faq => "FAQ",
            Page::Press => "Press",
            Page::Suppliers => "Suppliers",
            Page::Search => "Search",
            Page::Notifications => "Notifications",
            Page::AdminProducts => "Products",
            Page::AdminBuyers => "Buyers",
        }
    }

    /// Keyboard shortcut shown in the tab bar
    pub fn shortcut(&self) -> char {
        match self {
            Page::Dashboard => '1',
            Page::Blog => '2',
            Page::Faq => '3',
            Page::Press => '4',
            Page::Suppliers => '5',
            Page::Search => '6',
            Page::Notifications => '7',
            Page::AdminProducts => '8',
            Page::AdminBuyers => '9',
        }
    }

    pub const ALL: [Page; 9] = [
        Page::Dashboard,
        Page::Blog,
        Page::Faq,
        Page::Press,
        Page::Suppliers,
        Page::Search,
        Page::Notifications,
        Page::AdminProducts,
        Page::AdminBuyers,
    ];

    pub fn from_shortcut(c: char) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.shortcut() == c)
    }

    pub fn next(self) -> Self {
        let i = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(i + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Page::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Page::ALL[(i + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Map a notification's action URL onto a page, when one matches
    pub fn from_action_url(url: &str) -> Option<Page> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        if path.starts_with("/admin/products") {
            Some(Page::AdminProducts)
        } else if path.starts_with("/admin/buyers") {
            Some(Page::AdminBuyers)
        } else if path.starts_with("/admin") {
            Some(Page::Dashboard)
        } else if path.starts_with("/blog") {
            Some(Page::Blog)
        } else if path.starts_with("/faq") {
            Some(Page::Faq)
        } else if path.starts_with("/press") {
            Some(Page::Press)
        } else if path.starts_with("/suppliers") {
            Some(Page::Suppliers)
        } else if path.starts_with("/search") {
            Some(Page::Search)
        } else if path.starts_with("/notifications") {
            Some(Page::Notifications)
        } else {
            None
        }
    }
}

/// Modal layered above the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Header notification dropdown (same store as the page)
    NotificationPanel,
    QuoteWizard,
    UpgradeFlow,
    OtpLogin,
}

/// Text input focus: normal keys vs. typing into the page filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// '/' pressed: characters edit the current page's filter query
    Filter,
}

/// Transient status line at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
    /// Remaining ticks before the line fades
    ttl: u16,
}

impl StatusLine {
    const TTL_TICKS: u16 = 20; // 5 seconds

    pub fn info(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = false;
        self.ttl = Self::TTL_TICKS;
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.is_error = true;
        self.ttl = Self::TTL_TICKS;
    }

    pub fn tick(&mut self) {
        if self.ttl > 0 {
            self.ttl -= 1;
            if self.ttl == 0 {
                self.text.clear();
                self.is_error = false;
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        self.ttl > 0 && !self.text.is_empty()
    }
}

/// Back-office dashboard panes, fetched concurrently on entry
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub sales: Vec<SalesPoint>,
    pub categories: Vec<CategoryStat>,
    pub top_products: Vec<TopProduct>,
    pub loading: bool,
    pub loaded: bool,
}

impl DashboardState {
    pub fn total_revenue(&self) -> f64 {
        self.sales.iter().map(|p| p.revenue).sum()
    }

    pub fn total_orders(&self) -> u32 {
        self.sales.iter().map(|p| p.orders).sum()
    }
}

/// Supplier directory: a list page plus the verified-only toggle
#[derive(Debug, Clone, Default)]
pub struct SuppliersPage {
    pub list: ListPage<Supplier>,
    pub verified_only: bool,
}

impl SuppliersPage {
    /// Verified-filtered view over the list page's derived view
    pub fn visible(&self) -> Vec<&Supplier> {
        let mut view = self.list.visible();
        if self.verified_only {
            view.retain(|s| s.verified);
        }
        view
    }

    pub fn selected_supplier(&self) -> Option<&Supplier> {
        self.visible().into_iter().nth(self.list.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.list.selected + 1 < len {
            self.list.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.list.selected = self.list.selected.saturating_sub(1);
    }

    pub fn toggle_verified_only(&mut self) {
        self.verified_only = !self.verified_only;
        self.list.selected = 0;
    }
}

/// Admin products table: a list page plus the moderation status filter
#[derive(Debug, Clone, Default)]
pub struct AdminProductsPage {
    pub list: ListPage<AdminProduct>,
    /// Extra status predicate layered over the shared filter
    pub status_filter: Option<ListingStatus>,
    /// An update/delete is in flight; row actions disabled until refetch
    pub mutating: bool,
}

impl AdminProductsPage {
    /// Status-filtered view over the list page's derived view
    pub fn visible(&self) -> Vec<&AdminProduct> {
        let mut view = self.list.visible();
        if let Some(status) = self.status_filter {
            view.retain(|row| row.status == status);
        }
        view
    }

    pub fn selected_row(&self) -> Option<&AdminProduct> {
        self.visible().into_iter().nth(self.list.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.list.selected + 1 < len {
            self.list.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.list.selected = self.list.selected.saturating_sub(1);
    }

    /// Cycle: no filter -> Active -> Inactive -> Pending -> Rejected -> none
    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(ListingStatus::ALL[0]),
            Some(current) => {
                let i = ListingStatus::ALL.iter().position(|s| *s == current);
                match i {
                    Some(i) if i + 1 < ListingStatus::ALL.len() => {
                        Some(ListingStatus::ALL[i + 1])
                    }
                    _ => None,
                }
            }
        };
        self.list.selected = 0;
    }
}

/// The whole application model
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub page: Page,
    pub overlay: Option<Overlay>,
    pub input_mode: InputMode,
    pub should_quit: bool,

    pub blog: ListPage<BlogPost>,
    pub faq: ListPage<FaqItem>,
    pub press: ListPage<PressRelease>,
    pub suppliers: SuppliersPage,
    pub buyers: ListPage<Buyer>,
    pub admin_products: AdminProductsPage,
    pub dashboard: DashboardState,

    pub notifications: NotificationStore,
    pub search: SearchState,

    pub quote: Option<QuoteWizard>,
    pub upgrade: Option<UpgradeFlow>,
    pub otp: Option<OtpLogin>,

    /// Signed-in account's plan, shown in the header; updated after a
    /// completed upgrade
    pub plan: PlanTier,
    pub signed_in: bool,

    pub status: StatusLine,
}

impl AppState {
    pub fn new() -> Self {
        let mut state = Self::default();
        // Press reads newest-first by default
        state.press.filter.sort = tradedesk_core::SortKey::DateDesc;
        state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The wizard overlays capture all typing while open
    pub fn typing_into_overlay(&self) -> bool {
        matches!(
            self.overlay,
            Some(Overlay::QuoteWizard) | Some(Overlay::UpgradeFlow) | Some(Overlay::OtpLogin)
        )
    }

    pub fn close_overlay(&mut self) {
        match self.overlay {
            Some(Overlay::QuoteWizard) => self.quote = None,
            Some(Overlay::UpgradeFlow) => self.upgrade = None,
            Some(Overlay::OtpLogin) => self.otp = None,
            _ => {}
        }
        self.overlay = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_page_shortcuts_are_unique() {
        for page in Page::ALL {
            assert_eq!(Page::from_shortcut(page.shortcut()), Some(page));
        }
    }

    #[test]
    fn test_page_cycle_round_trip() {
        let mut page = Page::Dashboard;
        for _ in 0..Page::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::AdminBuyers);
    }

    #[test]
    fn test_action_url_mapping() {
        assert_eq!(Page::from_action_url("/blog/42"), Some(Page::Blog));
        assert_eq!(
            Page::from_action_url("/admin/products?status=pending"),
            Some(Page::AdminProducts)
        );
        assert_eq!(Page::from_action_url("/admin"), Some(Page::Dashboard));
        assert_eq!(Page::from_action_url("/checkout"), None);
    }

    #[test]
    fn test_status_line_fades_after_ttl() {
        let mut status = StatusLine::default();
        status.info("saved");
        assert!(status.is_visible());
        for _ in 0..StatusLine::TTL_TICKS {
            status.tick();
        }
        assert!(!status.is_visible());
        assert!(status.text.is_empty());
    }

    #[test]
    fn test_admin_status_filter_layers_over_list_filter() {
        use tradedesk_core::ListingStatus;

        fn row(name: &str, status: ListingStatus) -> AdminProduct {
            AdminProduct {
                id: name.to_string(),
                name: name.to_string(),
                category_name: "Metals".to_string(),
                supplier_name: "Acme".to_string(),
                price: 1.0,
                currency: "USD".to_string(),
                stock: 1,
                status,
                views: 0,
                orders: 0,
                rating: 0.0,
                created_at: Utc::now(),
            }
        }

        let mut page = AdminProductsPage::default();
        page.list.set_items(vec![
            row("a", ListingStatus::Active),
            row("b", ListingStatus::Pending),
            row("c", ListingStatus::Active),
        ]);
        assert_eq!(page.visible().len(), 3);

        page.cycle_status_filter(); // Active
        assert_eq!(page.status_filter, Some(ListingStatus::Active));
        assert_eq!(page.visible().len(), 2);

        page.cycle_status_filter(); // Inactive
        assert_eq!(page.visible().len(), 0);
    }

    #[test]
    fn test_verified_toggle_layers_over_supplier_filter() {
        use tradedesk_core::{PlanTier, SupplierStatus};

        fn supplier(name: &str, verified: bool) -> Supplier {
            Supplier {
                id: name.to_string(),
                company_name: name.to_string(),
                contact_name: "c".to_string(),
                country: "DE".to_string(),
                city: "Bremen".to_string(),
                description: String::new(),
                verified,
                status: SupplierStatus::Active,
                subscription: PlanTier::Free,
                rating: 4.0,
                total_products: 1,
                total_orders: 1,
                response_rate: 0.9,
                established: None,
                created_at: Utc::now(),
            }
        }

        let mut page = SuppliersPage::default();
        page.list
            .set_items(vec![supplier("a", true), supplier("b", false)]);
        assert_eq!(page.visible().len(), 2);

        page.toggle_verified_only();
        assert_eq!(page.visible().len(), 1);
        assert_eq!(page.selected_supplier().unwrap().id, "a");

        page.toggle_verified_only();
        assert_eq!(page.visible().len(), 2);
    }

    #[test]
    fn test_close_overlay_drops_wizard_state() {
        let mut state = AppState::new();
        state.quote = Some(crate::wizards::QuoteWizard::new("p", "Pipe", None, None));
        state.overlay = Some(Overlay::QuoteWizard);
        state.close_overlay();
        assert!(state.quote.is_none());
        assert!(state.overlay.is_none());
    }
}
