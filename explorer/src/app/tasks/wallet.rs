//! # Wallet Tasks

use crate::app::events::AppEvent;
use crate::app::state::WalletProvider;
use crate::services::api::{wallet, ApiClient};
use async_channel::Sender;
use std::sync::Arc;

/// Fetch mock balances for a freshly connected wallet.
pub(crate) async fn fetch_balances(
    client: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    provider: WalletProvider,
    address: String,
) {
    let result = wallet::get_wallet_balances(&client, provider.query_key(), &address).await;
    let _ = event_tx.send(AppEvent::BalancesResult(result)).await;
}
