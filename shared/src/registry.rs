//! # Token Registry
//!
//! The fixed catalog of tokens the explorer supports. The registry only seeds
//! which lookups to make; address, decimals and price all come from the API
//! at runtime.

/// Ethereum mainnet chain id, the only chain in the default catalog.
pub const CHAIN_ID_ETHEREUM: &str = "1";

/// A supported token: enough to drive the metadata lookup, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedToken {
    pub symbol: &'static str,
    pub name: &'static str,
    pub chain_id: &'static str,
}

/// Catalog of supported tokens, in quick-select display order.
pub const SUPPORTED_TOKENS: &[SupportedToken] = &[
    SupportedToken {
        symbol: "USDC",
        name: "USD Coin",
        chain_id: CHAIN_ID_ETHEREUM,
    },
    SupportedToken {
        symbol: "USDT",
        name: "Tether",
        chain_id: CHAIN_ID_ETHEREUM,
    },
    SupportedToken {
        symbol: "ETH",
        name: "Ethereum",
        chain_id: CHAIN_ID_ETHEREUM,
    },
    SupportedToken {
        symbol: "WBTC",
        name: "Wrapped Bitcoin",
        chain_id: CHAIN_ID_ETHEREUM,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_symbols_per_chain() {
        for (i, a) in SUPPORTED_TOKENS.iter().enumerate() {
            for b in &SUPPORTED_TOKENS[i + 1..] {
                assert!(
                    a.symbol != b.symbol || a.chain_id != b.chain_id,
                    "duplicate catalog entry: {}",
                    a.symbol
                );
            }
        }
    }

    #[test]
    fn catalog_contains_default_pair() {
        assert!(SUPPORTED_TOKENS.iter().any(|t| t.symbol == "USDC"));
        assert!(SUPPORTED_TOKENS.iter().any(|t| t.symbol == "ETH"));
    }
}
