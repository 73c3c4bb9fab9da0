//! # Wallet Handlers
//!
//! Mock wallet connect/disconnect. Connecting fabricates an address, flags
//! the connection as in flight and hands off to a background task; the result
//! comes back as an [`crate::app::events::AppEvent::BalancesResult`].

use crate::app::events::AppEvent;
use crate::app::state::{AppState, WalletProvider, WalletState};
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;

/// Connect the chosen provider and start the balance fetch.
pub(crate) fn connect(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    provider: WalletProvider,
) {
    let (client, address) = {
        let mut guard = state.write();
        if guard.wallet_connecting {
            return;
        }
        let Some(client) = guard.api_client.clone() else {
            tracing::error!("Wallet connect requested without an API client");
            return;
        };
        let address = mock_address();
        guard.wallet_connecting = true;
        guard.wallet = Some(WalletState {
            provider,
            address: address.clone(),
            balances: Default::default(),
        });
        (client, address)
    };

    tracing::info!(provider = provider.title(), %address, "Connecting wallet");
    tokio::spawn(tasks::wallet::fetch_balances(
        client, event_tx, provider, address,
    ));
}

/// Drop the connected wallet.
pub(crate) fn disconnect(state: &Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    guard.wallet = None;
    guard.wallet_connecting = false;
    tracing::info!("Wallet disconnected");
}

/// A plausible-looking EVM address. Purely cosmetic: the backend derives
/// balances from it deterministically, so any value works.
fn mock_address() -> String {
    let mut rng = rand::rng();
    let hex: String = (0..20).map(|_| format!("{:02x}", rng.random::<u8>())).collect();
    format!("0x{}", hex)
}

// ========== Tests ==========
