//! Global Tokio runtime for async work.
//!
//! eframe owns the main thread, but reqwest and the background tasks need a
//! tokio runtime. This static runtime bridges the two: the main thread holds
//! an enter guard so `tokio::spawn` works from UI handlers, and results come
//! back over the app's event channel.

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
