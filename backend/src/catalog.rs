//! # Token Catalog
//!
//! Static metadata for the tokens this backend serves. Addresses and decimal
//! counts are the real Ethereum mainnet values so identity strings match what
//! a production data source would return.

use shared::dto::token::TokenMetadata;

struct CatalogEntry {
    symbol: &'static str,
    name: &'static str,
    address: &'static str,
    decimals: u8,
    chain_id: &'static str,
}

const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        symbol: "USDC",
        name: "USD Coin",
        address: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        decimals: 6,
        chain_id: "1",
    },
    CatalogEntry {
        symbol: "USDT",
        name: "Tether",
        address: "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        decimals: 6,
        chain_id: "1",
    },
    CatalogEntry {
        symbol: "ETH",
        name: "Ethereum",
        address: "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        decimals: 18,
        chain_id: "1",
    },
    CatalogEntry {
        symbol: "WBTC",
        name: "Wrapped Bitcoin",
        address: "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599",
        decimals: 8,
        chain_id: "1",
    },
];

/// Look up metadata by symbol and chain. Symbol matching is case-insensitive.
pub fn find_token(symbol: &str, chain_id: &str) -> Option<TokenMetadata> {
    ENTRIES
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol) && e.chain_id == chain_id)
        .map(|e| TokenMetadata {
            address: e.address.to_string(),
            name: e.name.to_string(),
            symbol: e.symbol.to_string(),
            decimals: e.decimals,
            chain_id: e.chain_id.to_string(),
            logo_uri: None,
        })
}

/// Symbol for a known address, used by the price book.
pub fn symbol_for_address(address: &str, chain_id: &str) -> Option<&'static str> {
    ENTRIES
        .iter()
        .find(|e| e.address.eq_ignore_ascii_case(address) && e.chain_id == chain_id)
        .map(|e| e.symbol)
}

/// All catalog symbols, used for mock balance generation.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let token = find_token("usdc", "1").unwrap();
        assert_eq!(token.symbol, "USDC");
        assert_eq!(token.decimals, 6);
    }

    #[test]
    fn unknown_chain_misses() {
        assert!(find_token("USDC", "137").is_none());
    }

    #[test]
    fn address_reverse_lookup() {
        let token = find_token("WBTC", "1").unwrap();
        assert_eq!(symbol_for_address(&token.address, "1"), Some("WBTC"));
        assert_eq!(
            symbol_for_address(&token.address.to_lowercase(), "1"),
            Some("WBTC")
        );
    }
}
