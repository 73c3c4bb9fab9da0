//! # Token Price Handler

use crate::catalog;
use crate::error::{AppError, Result};
use crate::price_book::PriceBook;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use shared::dto::token::PriceQuote;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub address: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
}

/// `GET /api/tokens/price?address=0x..&chainId=1`
pub async fn get_token_price(
    State(book): State<PriceBook>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PriceQuote>> {
    let symbol = catalog::symbol_for_address(&query.address, &query.chain_id).ok_or_else(|| {
        AppError::NotFound(format!(
            "No price for {} on chain {}",
            query.address, query.chain_id
        ))
    })?;

    let price = book
        .price(symbol)
        .await
        .ok_or_else(|| AppError::Internal(format!("Price book missing {}", symbol)))?;

    debug!(symbol, price, "Price served");
    Ok(Json(PriceQuote::with_unit_price(price)))
}

// ========== Tests ==========
