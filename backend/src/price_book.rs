//! # Price Book
//!
//! In-memory price cache with a background refresh task. Prices start from
//! fixed bases and drift deterministically with time, so the explorer sees
//! realistic movement while tests stay reproducible.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

const BASE_PRICES: &[(&str, f64)] = &[
    ("USDC", 0.99),
    ("USDT", 1.02),
    ("ETH", 2700.0),
    ("WBTC", 104_000.0),
];

/// Maximum relative drift away from the base price.
const DRIFT_AMPLITUDE: f64 = 0.002;

/// Shared price cache. Cloning is cheap; all clones see the same prices.
#[derive(Clone)]
pub struct PriceBook {
    prices: Arc<RwLock<HashMap<String, f64>>>,
    last_update: Arc<RwLock<i64>>,
}

impl PriceBook {
    pub fn new() -> Self {
        let prices = BASE_PRICES
            .iter()
            .map(|(symbol, price)| (symbol.to_string(), *price))
            .collect();
        Self {
            prices: Arc::new(RwLock::new(prices)),
            last_update: Arc::new(RwLock::new(0)),
        }
    }

    /// Current price for a symbol.
    pub async fn price(&self, symbol: &str) -> Option<f64> {
        self.prices.read().await.get(symbol).copied()
    }

    /// Recompute every price at a given timestamp.
    async fn refresh_at(&self, now_secs: i64) {
        let mut prices = self.prices.write().await;
        for (symbol, base) in BASE_PRICES {
            let price = drifted_price(*base, symbol, now_secs);
            prices.insert(symbol.to_string(), price);
        }
        let mut last_update = self.last_update.write().await;
        *last_update = now_secs;
        debug!(count = prices.len(), "Price book refreshed");
    }

    /// Start the background refresh task (updates every N seconds).
    pub fn start_background_refresh(self, interval_secs: u64) {
        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(interval_secs));
            info!(interval_secs, "Starting price book refresh");
            loop {
                ticker.tick().await;
                let now = chrono::Utc::now().timestamp();
                self.refresh_at(now).await;
            }
        });
    }
}

impl Default for PriceBook {
    fn default() -> Self {
        Self::new()
    }
}

/// Sinusoidal drift around the base price, phase-shifted per symbol so the
/// whole book does not move in lockstep.
fn drifted_price(base: f64, symbol: &str, now_secs: i64) -> f64 {
    let phase: f64 = symbol.bytes().map(|b| b as f64).sum();
    let angle = now_secs as f64 / 60.0 + phase;
    base * (1.0 + DRIFT_AMPLITUDE * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_book_serves_base_prices() {
        let book = PriceBook::new();
        assert_eq!(book.price("USDC").await, Some(0.99));
        assert_eq!(book.price("WBTC").await, Some(104_000.0));
        assert_eq!(book.price("DOGE").await, None);
    }

    #[tokio::test]
    async fn refresh_is_deterministic_for_a_timestamp() {
        let a = PriceBook::new();
        let b = PriceBook::new();
        a.refresh_at(1_700_000_000).await;
        b.refresh_at(1_700_000_000).await;
        assert_eq!(a.price("ETH").await, b.price("ETH").await);
    }

    #[test]
    fn drift_stays_within_amplitude() {
        for t in [0, 1_000, 1_700_000_000] {
            let price = drifted_price(2700.0, "ETH", t);
            assert!(price >= 2700.0 * (1.0 - DRIFT_AMPLITUDE));
            assert!(price <= 2700.0 * (1.0 + DRIFT_AMPLITUDE));
        }
    }
}
