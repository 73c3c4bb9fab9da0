//! # Application Core
//!
//! The [`App`] owns the shared state, the event channel between background
//! tasks and the UI thread, and the recurring price poller. Construction is
//! side-effect free; [`App::start`] kicks off the async work.

pub(crate) mod event_handler;
pub mod events;
pub(crate) mod handlers;
pub mod state;
pub(crate) mod tasks;

use crate::app::event_handler::AppEventHandler;
use crate::app::events::AppEvent;
use crate::app::state::{AppState, CardSide, Token, WalletProvider};
use crate::services::api::ApiClient;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often held tokens are re-priced.
pub const PRICE_POLL_INTERVAL: Duration = Duration::from_secs(5);
/// How long a loaded token catalog stays fresh.
pub const METADATA_TTL: Duration = Duration::from_secs(60 * 60);

pub struct App {
    pub(crate) state: Arc<RwLock<AppState>>,
    event_tx: async_channel::Sender<AppEvent>,
    event_rx: async_channel::Receiver<AppEvent>,
    price_poller: Option<tokio::task::JoinHandle<()>>,
}

impl App {
    /// Build the app without spawning anything, so construction works outside
    /// a runtime.
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();
        App {
            state: Arc::new(RwLock::new(AppState::new(api_client))),
            event_tx,
            event_rx,
            price_poller: None,
        }
    }

    /// Start background work: the initial catalog load and the price poller.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.spawn_catalog_load();

        let state = Arc::clone(&self.state);
        let event_tx = self.event_tx.clone();
        self.price_poller = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(PRICE_POLL_INTERVAL);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;

                let targets = {
                    let mut guard = state.write();
                    if guard.explorer.fetching_prices {
                        continue;
                    }
                    let explorer = &guard.explorer;
                    let mut targets: Vec<Token> = Vec::with_capacity(2);
                    for card in [&explorer.source, &explorer.target] {
                        if let Some(token) = card.token.as_ref() {
                            if !targets.iter().any(|t| t.id == token.id) {
                                targets.push(token.clone());
                            }
                        }
                    }
                    if targets.is_empty() {
                        continue;
                    }
                    guard.explorer.fetching_prices = true;
                    targets
                };

                let client = {
                    let guard = state.read();
                    guard.api_client.clone()
                };
                if let Some(client) = client {
                    tasks::market::refresh_prices(client, event_tx.clone(), targets).await;
                }
            }
        }));
    }

    /// Drain and apply all pending events. Called once per frame.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.maybe_reload_catalog();
    }

    /// Abort the poller. Idempotent.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.price_poller.take() {
            handle.abort();
            tracing::info!("Price poller stopped");
        }
    }

    pub fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    // ========== UI delegation ==========

    pub fn amount_input(&self, side: CardSide, raw: &str) {
        handlers::card::handle_amount_input(&self.state, side, raw, Instant::now());
    }

    pub fn toggle_mode(&self, side: CardSide) {
        handlers::card::handle_mode_toggle(&self.state, side);
    }

    pub fn open_picker(&self, side: CardSide) {
        handlers::selection::open_picker(&self.state, side);
    }

    pub fn dismiss_picker(&self) {
        handlers::selection::dismiss_picker(&self.state);
    }

    pub fn set_picker_filter(&self, filter: String) {
        handlers::selection::set_picker_filter(&self.state, filter);
    }

    pub fn confirm_token(&self, token: Token) {
        handlers::selection::confirm_token(&self.state, token);
    }

    pub fn quick_select(&self, token: Token) {
        handlers::selection::quick_select(&self.state, token);
    }

    pub fn connect_wallet(&self, provider: WalletProvider) {
        handlers::wallet::connect(&self.state, self.event_tx.clone(), provider);
    }

    pub fn disconnect_wallet(&self) {
        handlers::wallet::disconnect(&self.state);
    }

    // ========== Internals ==========

    fn spawn_catalog_load(&self) {
        let client = {
            let mut guard = self.state.write();
            if guard.explorer.tokens_loading {
                return;
            }
            guard.explorer.tokens_loading = true;
            guard.api_client.clone()
        };
        if let Some(client) = client {
            tokio::spawn(tasks::market::load_tokens(client, self.event_tx.clone()));
        }
    }

    /// Reload metadata once the catalog TTL lapses. Metadata is effectively
    /// static, so this fires at most once an hour.
    fn maybe_reload_catalog(&self) {
        let stale = {
            let guard = self.state.read();
            match guard.explorer.metadata_fetched_at {
                Some(at) => at.elapsed() >= METADATA_TTL,
                None => false,
            }
        };
        if stale {
            self.spawn_catalog_load();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ========== Tests ==========
