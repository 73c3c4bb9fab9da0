//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::error::Result;
use crate::core::service::ApiService;
use reqwest::Client;
use shared::dto::token::TokenMetadata;
use shared::dto::wallet::WalletBalancesResponse;

/// Default base URL for the backend API server.
const API_BASE_URL: &str = "http://127.0.0.1:3001";

/// HTTP client for communicating with the backend API server.
///
/// Maintains a connection pool; all endpoint functions live in sibling
/// modules and borrow this client.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The base URL can be overridden with the `EXPLORER_API_URL` environment
    /// variable. The client carries a 10 second timeout so a dead backend
    /// never freezes the UI thread pool.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url =
            std::env::var("EXPLORER_API_URL").unwrap_or_else(|_| API_BASE_URL.to_string());

        Self { client, base_url }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn get_token_metadata(
        &self,
        symbol: &str,
        chain_id: &str,
    ) -> Result<Option<TokenMetadata>> {
        super::market::get_token_metadata(self, symbol, chain_id).await
    }

    async fn get_token_price(&self, address: &str, chain_id: &str) -> Result<f64> {
        super::market::get_token_price(self, address, chain_id).await
    }

    async fn get_wallet_balances(
        &self,
        provider: &str,
        address: &str,
    ) -> Result<WalletBalancesResponse> {
        super::wallet::get_wallet_balances(self, provider, address).await
    }
}
