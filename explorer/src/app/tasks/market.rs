//! # Market Data Tasks
//!
//! Catalog loading and the recurring price poll.

use crate::app::events::AppEvent;
use crate::app::state::Token;
use crate::services::api::{market, ApiClient};
use async_channel::Sender;
use shared::registry::SUPPORTED_TOKENS;
use std::sync::Arc;

/// Load the token catalog: metadata plus an initial price for every
/// registry entry. Entries whose metadata lookup fails are skipped rather
/// than failing the whole load.
pub(crate) async fn load_tokens(client: Arc<ApiClient>, event_tx: Sender<AppEvent>) {
    let mut tokens = Vec::with_capacity(SUPPORTED_TOKENS.len());

    for entry in SUPPORTED_TOKENS {
        let metadata = match market::get_token_metadata(&client, entry.symbol, entry.chain_id).await
        {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                tracing::warn!(symbol = entry.symbol, "Token missing upstream, skipping");
                continue;
            }
            Err(e) => {
                tracing::error!(symbol = entry.symbol, error = %e, "Metadata fetch failed");
                continue;
            }
        };

        let price = match market::get_token_price(&client, &metadata.address, &metadata.chain_id)
            .await
        {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!(symbol = entry.symbol, error = %e, "Initial price unavailable");
                1.0
            }
        };

        tokens.push(Token::from_metadata(metadata, price));
    }

    tracing::info!(count = tokens.len(), "Token catalog loaded");
    let _ = event_tx.send(AppEvent::TokensLoaded(tokens)).await;
}

/// One polling pass: refresh the price of every token currently held by a
/// card. Failures keep the previous price; the pass always reports completion
/// so the next interval can start a new one.
pub(crate) async fn refresh_prices(
    client: Arc<ApiClient>,
    event_tx: Sender<AppEvent>,
    targets: Vec<Token>,
) {
    for token in targets {
        match market::get_token_price(&client, &token.address, &token.chain_id).await {
            Ok(price) => {
                let _ = event_tx.send(AppEvent::PriceUpdated(token.with_price(price))).await;
            }
            Err(e) => {
                tracing::warn!(symbol = %token.symbol, error = %e, "Price refresh failed");
            }
        }
    }
    let _ = event_tx.send(AppEvent::PricePollFinished).await;
}
