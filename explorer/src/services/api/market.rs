//! # Token Data Endpoints
//!
//! Token metadata and unit-price lookups. Metadata rarely changes and is
//! fetched once per session; prices are polled on a short interval, so the
//! price path keeps its logging at debug level.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use shared::dto::token::{PriceQuote, TokenMetadata};

/// Look up token metadata by symbol and chain.
///
/// A 404 maps to `Ok(None)`: the token is simply not available, which the
/// caller renders as a "select a token" state rather than an error.
#[tracing::instrument(skip(client), fields(symbol = %symbol, chain_id = %chain_id))]
pub async fn get_token_metadata(
    client: &ApiClient,
    symbol: &str,
    chain_id: &str,
) -> Result<Option<TokenMetadata>> {
    let url = format!(
        "{}/api/tokens/erc20?symbol={}&chainId={}",
        client.base_url(),
        symbol,
        chain_id
    );

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Token metadata network error");
        AppError::Api(format!("Network error: {}", e))
    })?;

    let status = response.status();
    if status.is_success() {
        let metadata = response.json::<TokenMetadata>().await.map_err(|e| {
            tracing::error!(error = %e, "Token metadata parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        })?;
        tracing::debug!(token_id = %metadata.id(), "Token metadata fetched");
        Ok(Some(metadata))
    } else if status == reqwest::StatusCode::NOT_FOUND {
        tracing::warn!(status = status.as_u16(), "Token not found upstream");
        Ok(None)
    } else {
        tracing::warn!(status = status.as_u16(), "Token metadata fetch failed");
        Err(AppError::Api(format!(
            "Failed to fetch token metadata: {}",
            status
        )))
    }
}

/// Look up the current USD unit price for a token address.
///
/// Upstream responses are inconsistent about the price field name, so the
/// quote is parsed leniently and resolved with a `1.0` fallback - the UI is
/// never blocked on a missing price.
#[tracing::instrument(skip(client), fields(address = %address, chain_id = %chain_id))]
pub async fn get_token_price(
    client: &ApiClient,
    address: &str,
    chain_id: &str,
) -> Result<f64> {
    let start = std::time::Instant::now();
    let url = format!(
        "{}/api/tokens/price?address={}&chainId={}",
        client.base_url(),
        address,
        chain_id
    );

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Price fetch network error");
        AppError::Api(format!("Network error: {}", e))
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let quote = response.json::<PriceQuote>().await.map_err(|e| {
            tracing::error!(error = %e, "Price response parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        })?;
        let unit_price = quote.resolve_unit_price();
        tracing::debug!(
            unit_price,
            duration_ms = duration.as_millis(),
            "Price fetched"
        );
        Ok(unit_price)
    } else {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Price fetch failed"
        );
        Err(AppError::Api(format!("Failed to fetch price: {}", status)))
    }
}
