//! # External Service Integrations
//!
//! - `api`: HTTP client for the backend (token metadata, prices, mock wallet)

pub mod api;
