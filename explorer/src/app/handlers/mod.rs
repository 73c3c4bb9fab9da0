//! # UI Action Handlers
//!
//! Synchronous state transitions triggered from the UI. Handlers take the
//! shared state (and an event sender when they spawn work) and keep their
//! lock sections short.

pub(crate) mod card;
pub(crate) mod selection;
pub(crate) mod wallet;
