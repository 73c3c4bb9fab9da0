//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. The app orchestrator and background tasks depend on
//! [`ApiService`] rather than the concrete reqwest client, so tests can
//! substitute a canned implementation.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::dto::token::TokenMetadata;
use shared::dto::wallet::WalletBalancesResponse;

/// Trait for API service operations.
///
/// Failures surface as [`crate::core::error::AppError`]: callers either log
/// them or map them into a "token unavailable" state, never display them
/// verbatim.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Look up token metadata by symbol and chain.
    ///
    /// `Ok(None)` means the token is unknown upstream; the caller treats it
    /// as unavailable rather than an error.
    async fn get_token_metadata(
        &self,
        symbol: &str,
        chain_id: &str,
    ) -> Result<Option<TokenMetadata>>;

    /// Look up the current USD unit price for a token address.
    ///
    /// Implementations resolve inconsistent upstream field names and fall
    /// back to `1.0` when no price field is present.
    async fn get_token_price(&self, address: &str, chain_id: &str) -> Result<f64>;

    /// Fetch mock wallet balances for a provider/address pair.
    async fn get_wallet_balances(
        &self,
        provider: &str,
        address: &str,
    ) -> Result<WalletBalancesResponse>;
}
