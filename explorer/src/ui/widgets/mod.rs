//! # Reusable Widgets

pub mod token_card;
pub mod token_picker;
pub mod wallet_menu;
