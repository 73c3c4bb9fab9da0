//! # Wallet DTOs
//!
//! Mock wallet balance types. Balances are strings on the wire: the backend
//! formats them to a fixed precision and the frontend re-parses only when it
//! needs to compare against a spend amount.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Balance for a single token held by the mock wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: String,
    /// Native-unit balance, formatted to 4 decimal places.
    pub balance: String,
    /// USD value of the balance, formatted to 2 decimal places.
    #[serde(rename = "usdValue")]
    pub usd_value: String,
}

/// Response for `GET /api/wallet/balances`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalancesResponse {
    pub address: String,
    pub provider: String,
    /// Balances keyed by token symbol.
    pub balances: HashMap<String, TokenBalance>,
}

/// Generic error envelope returned by the backend on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
