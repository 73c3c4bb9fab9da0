//! # Token Explorer Backend
//!
//! Small axum service behind the desktop explorer: token metadata, a price
//! book with deterministic drift, and a mock wallet. Everything is in-memory;
//! the process is self-contained.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod price_book;

use axum::routing::get;
use axum::Router;
use price_book::PriceBook;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app(price_book: PriceBook) -> Router {
    Router::new()
        .route("/api/tokens/erc20", get(handlers::tokens::get_erc20_token))
        .route("/api/tokens/price", get(handlers::price::get_token_price))
        .route(
            "/api/wallet/balances",
            get(handlers::wallet::get_wallet_balances),
        )
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(price_book)
}
