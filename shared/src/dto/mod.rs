//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the explorer frontend and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`token`] - Token metadata and unit-price quote DTOs
//! - [`wallet`] - Mock wallet balances DTOs
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/tokens/price?address=0xa0b8...eb48&chainId=1
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "unitPrice": 0.99 }
//! ```

pub mod token;
pub mod wallet;

pub use token::{PriceQuote, TokenMetadata};
pub use wallet::{ErrorResponse, TokenBalance, WalletBalancesResponse};
