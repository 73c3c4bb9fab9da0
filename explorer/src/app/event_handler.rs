//! # Event Handling
//!
//! Applies [`AppEvent`]s drained on each tick to the shared state.

use crate::app::events::AppEvent;
use crate::app::handlers::card;
use crate::app::state::{
    AppState, CardSide, DEFAULT_SOURCE_SYMBOL, DEFAULT_TARGET_SYMBOL,
};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

pub(crate) trait AppEventHandler {
    fn handle_event(&mut self, event: AppEvent);
}

impl AppEventHandler for crate::app::App {
    fn handle_event(&mut self, event: AppEvent) {
        handle_event_impl(&self.state, event);
    }
}

pub(crate) fn handle_event_impl(state: &Arc<RwLock<AppState>>, event: AppEvent) {
    match event {
        AppEvent::TokensLoaded(tokens) => on_tokens_loaded(state, tokens),
        AppEvent::PriceUpdated(token) => card::handle_price_update(state, token),
        AppEvent::PricePollFinished => {
            state.write().explorer.fetching_prices = false;
        }
        AppEvent::BalancesResult(result) => on_balances_result(state, result),
    }
}

/// Install the loaded catalog and fill empty cards with defaults.
///
/// The source card prefers USDC, the target prefers ETH; either falls back to
/// the first catalog entry not already taken by the other side. A one-token
/// catalog leaves the target empty rather than mirroring the source.
fn on_tokens_loaded(state: &Arc<RwLock<AppState>>, tokens: Vec<crate::app::state::Token>) {
    let mut guard = state.write();
    let explorer = &mut guard.explorer;
    explorer.tokens_loading = false;
    explorer.metadata_fetched_at = Some(Instant::now());
    explorer.tokens = tokens;

    if explorer.source.token.is_none() {
        explorer.source.token = explorer
            .tokens
            .iter()
            .find(|t| t.symbol == DEFAULT_SOURCE_SYMBOL)
            .or_else(|| explorer.tokens.first())
            .cloned();
    }
    if explorer.target.token.is_none() {
        let source_id = explorer.source.token.as_ref().map(|t| t.id.clone());
        explorer.target.token = explorer
            .tokens
            .iter()
            .find(|t| t.symbol == DEFAULT_TARGET_SYMBOL && Some(&t.id) != source_id.as_ref())
            .or_else(|| {
                explorer
                    .tokens
                    .iter()
                    .find(|t| Some(&t.id) != source_id.as_ref())
            })
            .cloned();
    }

    card::derive_display(explorer, CardSide::Source);
    card::derive_display(explorer, CardSide::Target);
    guard.needs_repaint = true;
}

fn on_balances_result(
    state: &Arc<RwLock<AppState>>,
    result: Result<shared::dto::wallet::WalletBalancesResponse, crate::core::error::AppError>,
) {
    let mut guard = state.write();
    guard.wallet_connecting = false;
    match result {
        Ok(response) => {
            let connected = match guard.wallet.as_mut() {
                Some(wallet) if wallet.address == response.address => {
                    wallet.balances = response.balances;
                    Some(wallet.provider.title())
                }
                _ => None,
            };
            match connected {
                Some(title) => guard.notify("success", format!("{} connected", title)),
                // A disconnect raced the fetch; drop the stale result.
                None => tracing::debug!("Ignoring balances for a closed wallet session"),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Wallet connection failed");
            guard.wallet = None;
            guard.notify("error", format!("Wallet connection failed: {}", e));
        }
    }
    guard.needs_repaint = true;
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Token, WalletProvider, WalletState};
    use crate::core::error::AppError;
    use shared::dto::wallet::{TokenBalance, WalletBalancesResponse};
    use std::collections::HashMap;

    fn token(symbol: &str, price: f64) -> Token {
        Token {
            id: format!("1-0x{}", symbol.to_lowercase()),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            decimals: 8,
            chain_id: "1".to_string(),
            address: format!("0x{}", symbol.to_lowercase()),
            logo_uri: None,
            price,
        }
    }

    #[test]
    fn catalog_load_assigns_default_pair() {
        let state = Arc::new(RwLock::new(AppState::default()));
        handle_event_impl(
            &state,
            AppEvent::TokensLoaded(vec![
                token("USDC", 0.99),
                token("USDT", 1.02),
                token("ETH", 2700.0),
                token("WBTC", 104_000.0),
            ]),
        );

        let guard = state.read();
        assert_eq!(guard.explorer.tokens.len(), 4);
        assert_eq!(guard.explorer.source.token.as_ref().unwrap().symbol, "USDC");
        assert_eq!(guard.explorer.target.token.as_ref().unwrap().symbol, "ETH");
        assert!(!guard.explorer.tokens_loading);
    }

    #[test]
    fn one_token_catalog_leaves_target_empty() {
        let state = Arc::new(RwLock::new(AppState::default()));
        handle_event_impl(&state, AppEvent::TokensLoaded(vec![token("USDC", 0.99)]));

        let guard = state.read();
        assert_eq!(guard.explorer.source.token.as_ref().unwrap().symbol, "USDC");
        assert!(guard.explorer.target.token.is_none());
    }

    #[test]
    fn catalog_load_keeps_existing_selections() {
        let state = Arc::new(RwLock::new(AppState::default()));
        state.write().explorer.source.token = Some(token("WBTC", 104_000.0));
        handle_event_impl(
            &state,
            AppEvent::TokensLoaded(vec![token("USDC", 0.99), token("ETH", 2700.0)]),
        );

        let guard = state.read();
        assert_eq!(guard.explorer.source.token.as_ref().unwrap().symbol, "WBTC");
        assert_eq!(guard.explorer.target.token.as_ref().unwrap().symbol, "ETH");
    }

    #[test]
    fn balances_result_fills_connected_wallet() {
        let state = Arc::new(RwLock::new(AppState::default()));
        {
            let mut guard = state.write();
            guard.wallet_connecting = true;
            guard.wallet = Some(WalletState {
                provider: WalletProvider::MetaMask,
                address: "0xabc".to_string(),
                balances: HashMap::new(),
            });
        }
        let mut balances = HashMap::new();
        balances.insert(
            "ETH".to_string(),
            TokenBalance {
                symbol: "ETH".to_string(),
                balance: "1.5000".to_string(),
                usd_value: "4500.00".to_string(),
            },
        );
        handle_event_impl(
            &state,
            AppEvent::BalancesResult(Ok(WalletBalancesResponse {
                address: "0xabc".to_string(),
                provider: "metamask".to_string(),
                balances,
            })),
        );

        let guard = state.read();
        assert!(!guard.wallet_connecting);
        let wallet = guard.wallet.as_ref().unwrap();
        assert_eq!(wallet.native_balance("ETH"), Some(1.5));
        assert_eq!(guard.pending_notifications.len(), 1);
        assert_eq!(guard.pending_notifications[0].0, "success");
    }

    #[test]
    fn balances_error_clears_wallet() {
        let state = Arc::new(RwLock::new(AppState::default()));
        {
            let mut guard = state.write();
            guard.wallet_connecting = true;
            guard.wallet = Some(WalletState {
                provider: WalletProvider::TrustWallet,
                address: "0xdef".to_string(),
                balances: HashMap::new(),
            });
        }
        handle_event_impl(
            &state,
            AppEvent::BalancesResult(Err(AppError::Wallet("Network error".to_string()))),
        );

        let guard = state.read();
        assert!(guard.wallet.is_none());
        assert!(!guard.wallet_connecting);
        assert_eq!(guard.pending_notifications[0].0, "error");
    }
}
