//! # Token Explorer - Library Root
//!
//! A native desktop GUI for exploring token prices and swap rates. Two linked
//! cards share one canonical USD amount: edit either side in dollars or
//! native units and the other side re-derives instantly, while live prices
//! keep both quotes current.
//!
//! ## Architecture
//!
//! ```text
//! main.rs (eframe window)
//!   │
//!   ├── app (state, events, handlers, background tasks)
//!   │   └── services::api (backend HTTP client)
//!   │
//!   └── ui (rendering)
//!       ├── screens::explorer
//!       ├── widgets (cards, picker, wallet menu)
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! State lives in `Arc<RwLock<AppState>>`, locked briefly and never across a
//! frame. Async tasks report back over an `AppEvent` channel drained once per
//! tick, so every state transition happens on the UI thread.
//!
//! The conversion rules live in [`core::conversion`]: USD quotes round *up*
//! to the next cent so a displayed dollar amount never understates the token
//! value, and native amounts round to the token's own decimals.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::events::AppEvent;
pub use app::state::AppState;
pub use app::App;
pub use core::{AppError, Result};
