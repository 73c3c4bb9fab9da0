//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the explorer frontend and the
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::token`]**: Token metadata and price quote DTOs
//!   - **[`dto::wallet`]**: Mock wallet balance DTOs
//! - **[`registry`]**: The fixed catalog of supported tokens
//! - **[`utils`]**: Shared utility functions
//!
//! ## Wire Format
//!
//! The upstream token API speaks camelCase (`unitPrice`, `logoURI`), so the
//! token DTOs carry explicit serde renames. Everything else uses the default
//! snake_case mapping. Optional fields are omitted from JSON when `None`.
//!
//! ## Example
//!
//! ```rust
//! use shared::dto::token::PriceQuote;
//!
//! // The backend serializes this as {"unitPrice": 2700.0}; the frontend
//! // resolves whichever price field the response carries.
//! let quote = PriceQuote::with_unit_price(2700.0);
//! assert_eq!(quote.resolve_unit_price(), 2700.0);
//! ```

pub mod dto;
pub mod registry;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use registry::{SupportedToken, CHAIN_ID_ETHEREUM, SUPPORTED_TOKENS};
pub use utils::format_address;
