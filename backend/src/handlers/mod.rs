//! # HTTP Handlers

pub mod price;
pub mod tokens;
pub mod wallet;

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
