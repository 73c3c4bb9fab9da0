//! # Backend API Services
//!
//! HTTP client and endpoint functions for the backend API.

mod client;
pub mod market;
pub mod wallet;

pub use client::ApiClient;
