//! # tradedesk-app - Application State and Orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, an [`AppState`] model, a pure
//! [`handler::update`] function, and an action dispatcher
//! ([`process::handle_action`]) that spawns the remote calls. It also owns
//! the wizard state machines, the notification store, the search
//! controller, and configuration loading.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod list_page;
pub mod message;
pub mod notifications;
pub mod process;
pub mod search;
pub mod state;
pub mod wizards;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list_page::ListPage;
pub use message::{Message, NotificationOp};
pub use notifications::NotificationStore;
pub use process::process_message;
pub use search::SearchState;
pub use state::{AppState, InputMode, Overlay, Page};
