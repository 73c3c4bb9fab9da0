//! # Token Metadata Handler

use crate::catalog;
use crate::error::{AppError, Result};
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use shared::dto::token::TokenMetadata;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub symbol: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
}

/// `GET /api/tokens/erc20?symbol=USDC&chainId=1`
pub async fn get_erc20_token(Query(query): Query<TokenQuery>) -> Result<Json<TokenMetadata>> {
    debug!(symbol = %query.symbol, chain_id = %query.chain_id, "Token metadata request");

    match catalog::find_token(&query.symbol, &query.chain_id) {
        Some(token) => {
            info!(token_id = %token.id(), "Token metadata served");
            Ok(Json(token))
        }
        None => Err(AppError::NotFound(format!(
            "No token {} on chain {}",
            query.symbol, query.chain_id
        ))),
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_is_served() {
        let result = get_erc20_token(Query(TokenQuery {
            symbol: "ETH".to_string(),
            chain_id: "1".to_string(),
        }))
        .await
        .unwrap();
        assert_eq!(result.0.symbol, "ETH");
        assert_eq!(result.0.decimals, 18);
        assert_eq!(result.0.id(), format!("1-{}", result.0.address));
    }

    #[tokio::test]
    async fn unknown_token_is_not_found() {
        let result = get_erc20_token(Query(TokenQuery {
            symbol: "DOGE".to_string(),
            chain_id: "1".to_string(),
        }))
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
