//! # Utility Functions
//!
//! - `validation`: input format checks applied before a keystroke is accepted
//! - `runtime`: static Tokio runtime shared by UI handlers and tasks

pub mod runtime;
pub mod validation;
