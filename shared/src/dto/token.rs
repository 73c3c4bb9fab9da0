//! # Token DTOs
//!
//! Metadata and price quote types exchanged with the token API.
//!
//! Metadata (address, decimals, name) rarely changes and is fetched once per
//! session; the unit price changes constantly and is polled on a short
//! interval. The two are therefore separate DTOs with separate endpoints.

use serde::{Deserialize, Serialize};

/// Immutable reference data for an ERC-20 token on a specific chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(rename = "chainId")]
    pub chain_id: String,
    #[serde(rename = "logoURI", skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl TokenMetadata {
    /// Stable identity for a token: two tokens are the same entity iff this
    /// matches. Symbols are not unique across chains.
    pub fn id(&self) -> String {
        format!("{}-{}", self.chain_id, self.address)
    }
}

/// Unit price quote for a token.
///
/// Upstream price providers are inconsistent about the field name, so every
/// known spelling is accepted; [`PriceQuote::resolve_unit_price`] picks the
/// first one present and falls back to `1.0` so the UI is never blocked on a
/// missing price.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceQuote {
    #[serde(rename = "unitPrice", skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(rename = "usdPrice", skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl PriceQuote {
    /// Construct a quote under the canonical `unitPrice` field.
    pub fn with_unit_price(unit_price: f64) -> Self {
        PriceQuote {
            unit_price: Some(unit_price),
            usd_price: None,
            price: None,
        }
    }

    /// Resolve the unit price, tolerating the known field variants.
    ///
    /// Returns `1.0` when no field is present or the value is unusable.
    pub fn resolve_unit_price(&self) -> f64 {
        let candidate = self
            .unit_price
            .or(self.usd_price)
            .or(self.price)
            .unwrap_or(1.0);
        if candidate.is_finite() && candidate >= 0.0 {
            candidate
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_identity_includes_chain() {
        let eth_usdc = TokenMetadata {
            address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
            chain_id: "1".to_string(),
            logo_uri: None,
        };
        let mut polygon_usdc = eth_usdc.clone();
        polygon_usdc.chain_id = "137".to_string();

        assert_ne!(eth_usdc.id(), polygon_usdc.id());
        assert!(eth_usdc.id().starts_with("1-0x"));
    }

    #[test]
    fn resolve_prefers_unit_price_field() {
        let quote = PriceQuote {
            unit_price: Some(0.99),
            usd_price: Some(5.0),
            price: Some(7.0),
        };
        assert_eq!(quote.resolve_unit_price(), 0.99);
    }

    #[test]
    fn resolve_falls_through_known_fields() {
        let quote: PriceQuote = serde_json::from_str(r#"{"usdPrice": 2700.0}"#)
            .expect("quote should parse in test");
        assert_eq!(quote.resolve_unit_price(), 2700.0);

        let quote: PriceQuote = serde_json::from_str(r#"{"price": 104000.0}"#)
            .expect("quote should parse in test");
        assert_eq!(quote.resolve_unit_price(), 104000.0);
    }

    #[test]
    fn resolve_defaults_to_one_when_no_field_matches() {
        let quote: PriceQuote = serde_json::from_str(r#"{"quoteCurrency": "USD"}"#)
            .expect("unknown fields should be ignored in test");
        assert_eq!(quote.resolve_unit_price(), 1.0);
    }

    #[test]
    fn resolve_rejects_non_finite_and_negative_values() {
        let quote = PriceQuote {
            unit_price: Some(f64::NAN),
            usd_price: None,
            price: None,
        };
        assert_eq!(quote.resolve_unit_price(), 1.0);

        let quote = PriceQuote {
            unit_price: Some(-3.0),
            usd_price: None,
            price: None,
        };
        assert_eq!(quote.resolve_unit_price(), 1.0);
    }

    #[test]
    fn metadata_round_trips_camel_case_wire_names() {
        let json = r#"{
            "address": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "name": "Ethereum",
            "symbol": "ETH",
            "decimals": 18,
            "chainId": "1",
            "logoURI": "https://tokens.example/eth.png"
        }"#;
        let meta: TokenMetadata = serde_json::from_str(json).expect("metadata should parse in test");
        assert_eq!(meta.chain_id, "1");
        assert_eq!(meta.logo_uri.as_deref(), Some("https://tokens.example/eth.png"));

        let back = serde_json::to_value(&meta).expect("metadata should serialize in test");
        assert!(back.get("chainId").is_some());
        assert!(back.get("logoURI").is_some());
    }
}
