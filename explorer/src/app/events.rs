//! # Application Events
//!
//! Events produced by background tasks and consumed on the UI thread each
//! frame. Tasks never touch state directly; they send one of these instead.

use crate::app::state::Token;
use crate::core::error::AppError;
use shared::dto::wallet::WalletBalancesResponse;

/// Result of an async operation, applied to state on the next tick.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Token catalog finished loading (metadata plus initial prices).
    TokensLoaded(Vec<Token>),
    /// A fresh price arrived for one token.
    PriceUpdated(Token),
    /// Price polling pass finished (success or not); clears the in-flight flag.
    PricePollFinished,
    /// Mock wallet balance lookup finished.
    BalancesResult(Result<WalletBalancesResponse, AppError>),
}
