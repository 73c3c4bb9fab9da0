//! # Screens

pub mod explorer;
