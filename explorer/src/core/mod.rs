//! # Core Module
//!
//! Domain logic with no UI or network dependencies: the conversion engine,
//! error types, and the service trait seam.

pub mod conversion;
pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
