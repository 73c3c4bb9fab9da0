//! # Wallet Query Endpoints
//!
//! Mock wallet balance lookup. The backend generates deterministic balances
//! keyed by address+provider and simulates network latency, so this path
//! behaves like a real integration without one.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use shared::dto::wallet::WalletBalancesResponse;

/// Fetch mock wallet balances for a provider/address pair.
#[tracing::instrument(skip(client), fields(provider = %provider))]
pub async fn get_wallet_balances(
    client: &ApiClient,
    provider: &str,
    address: &str,
) -> Result<WalletBalancesResponse> {
    let url = format!(
        "{}/api/wallet/balances?provider={}&address={}",
        client.base_url(),
        provider,
        address
    );

    let response = client
        .client
        .get(&url)
        .send()
        .await
        .map_err(|e| AppError::Wallet(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        response
            .json::<WalletBalancesResponse>()
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to parse response: {}", e)))
    } else {
        Err(AppError::Wallet(format!(
            "Failed to fetch wallet balances: {}",
            response.status()
        )))
    }
}
