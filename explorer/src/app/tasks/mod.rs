//! # Background Tasks
//!
//! Async work spawned off the UI thread. Tasks own an `Arc` to the API client,
//! never touch state directly, and report back over the event channel.

pub(crate) mod market;
pub(crate) mod wallet;
