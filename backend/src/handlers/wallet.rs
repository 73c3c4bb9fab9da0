//! # Mock Wallet Handler
//!
//! Balances are derived deterministically from the address and provider, so
//! reconnecting the same wallet always shows the same holdings. A short sleep
//! simulates provider latency.

use crate::catalog;
use crate::error::{AppError, Result};
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use shared::dto::wallet::{TokenBalance, WalletBalancesResponse};
use std::collections::HashMap;
use tracing::info;

const SIMULATED_LATENCY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct BalancesQuery {
    pub provider: String,
    pub address: String,
}

/// `GET /api/wallet/balances?provider=metamask&address=0x..`
pub async fn get_wallet_balances(
    Query(query): Query<BalancesQuery>,
) -> Result<Json<WalletBalancesResponse>> {
    if query.address.is_empty() {
        return Err(AppError::InvalidInput("address must not be empty".to_string()));
    }
    if query.provider.is_empty() {
        return Err(AppError::InvalidInput(
            "provider must not be empty".to_string(),
        ));
    }

    tokio::time::sleep(std::time::Duration::from_millis(SIMULATED_LATENCY_MS)).await;

    let balances = mock_balances(&query.address, &query.provider);
    info!(provider = %query.provider, count = balances.len(), "Balances served");

    Ok(Json(WalletBalancesResponse {
        address: query.address,
        provider: query.provider,
        balances,
    }))
}

/// Deterministic balances for every catalog token.
fn mock_balances(address: &str, provider: &str) -> HashMap<String, TokenBalance> {
    let seed: u64 =
        address.bytes().map(|b| b as u64).sum::<u64>() + provider.len() as u64;

    catalog::symbols()
        .map(|symbol| {
            let raw = ((seed * symbol.len() as u64) % 1000) as f64 / 100.0 + 0.01;
            let unit_value = match symbol {
                "ETH" => 3000.0,
                "WBTC" => 60_000.0,
                _ => 1.0,
            };
            (
                symbol.to_string(),
                TokenBalance {
                    symbol: symbol.to_string(),
                    balance: format!("{:.4}", raw),
                    usd_value: format!("{:.2}", raw * unit_value),
                },
            )
        })
        .collect()
}

// ========== Tests ==========
