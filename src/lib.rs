//! TradeDesk library
//!
//! Wires the pieces together: the remote marketplace services, the TEA
//! update loop from `tradedesk-app`, and the ratatui front-end from
//! `tradedesk-tui`. The event loop is synchronous; remote calls run on
//! spawned tokio tasks and report back over the message channel.

use std::time::Duration;

use tokio::sync::mpsc;

use tradedesk_api::{MarketplaceApi, RemoteMarketplace};
use tradedesk_app::config::Settings;
use tradedesk_app::message::Message;
use tradedesk_app::{process_message, AppState, Page};
use tradedesk_core::prelude::*;
use tradedesk_tui::Theme;

/// Run the TUI against the configured marketplace backend
pub async fn run(settings: Settings) -> Result<()> {
    tradedesk_tui::install_panic_hook();

    let api = RemoteMarketplace::new(
        &settings.api.base_url,
        Duration::from_secs(settings.api.timeout_secs),
    )?;

    let mut terminal = ratatui::init();
    let result = run_with_terminal(&mut terminal, settings, api).await;
    ratatui::restore();
    result
}

async fn run_with_terminal<M>(
    terminal: &mut ratatui::DefaultTerminal,
    settings: Settings,
    api: M,
) -> Result<()>
where
    M: MarketplaceApi + Clone + Send + Sync + 'static,
{
    let theme = Theme::by_name(&settings.ui.theme);
    let tick = Duration::from_millis(settings.ui.tick_ms.max(50));

    let mut state = AppState::new();
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Ctrl+C and SIGTERM quit cleanly even if the terminal eats the key
    spawn_signal_handler(msg_tx.clone());

    // First screen fetch
    process_message(&mut state, Message::Navigate(Page::Dashboard), &msg_tx, &api);

    run_loop(terminal, &mut state, &mut msg_rx, &msg_tx, &api, theme, tick)
}

/// Main event loop: drain completions, draw, poll input
fn run_loop<M>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    api: &M,
    theme: Theme,
    tick: Duration,
) -> Result<()>
where
    M: MarketplaceApi + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Completions from spawned API tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, api);
        }

        // Render
        terminal.draw(|frame| tradedesk_tui::view(frame, state, theme))?;

        // Terminal events; the poll timeout doubles as the tick source
        if let Some(message) = tradedesk_tui::poll(tick)? {
            process_message(state, message, msg_tx, api);
        }
    }

    info!("quit requested, shutting down");
    Ok(())
}

/// Send Quit on SIGINT/SIGTERM
fn spawn_signal_handler(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = msg_tx.send(Message::Quit).await;
        }
    });
}
