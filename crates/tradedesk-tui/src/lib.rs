//! # tradedesk-tui - Terminal UI
//!
//! Widgets and rendering for TradeDesk. The crate is render-only: it reads
//! `tradedesk-app` state and draws it; all mutation goes through the app
//! crate's update loop. `event::poll` converts crossterm input into
//! `Message`s for that loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use event::poll;
pub use render::view;
pub use terminal::install_panic_hook;
pub use theme::Theme;
