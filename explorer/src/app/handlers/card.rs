//! # Card Handlers
//!
//! Input handling for the two linked swap cards. Every edit funnels through
//! the canonical USD amount: the edited card writes it, the other card
//! re-derives its display from it. Rejected edits leave state untouched.

use crate::app::state::{AppState, CardSide, InputMode};
use crate::core::conversion;
use crate::utils::validation::validate_decimal_input;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Minimum gap between repeated balance warnings on the same card.
pub(crate) const BALANCE_WARNING_INTERVAL: Duration = Duration::from_secs(3);

/// Apply a keystroke-level edit to one card's amount field.
///
/// Rejects (without mutating anything) input that is not a plain decimal
/// string or that carries more fractional digits than the card's mode allows.
/// Accepted input becomes the card's display value and is republished to the
/// canonical USD amount, from which the opposite card re-derives its display.
pub(crate) fn handle_amount_input(
    state: &Arc<RwLock<AppState>>,
    side: CardSide,
    raw: &str,
    now: Instant,
) {
    let mut guard = state.write();
    let explorer = &mut guard.explorer;

    if !validate_decimal_input(raw).is_valid {
        return;
    }
    let card = explorer.card(side);
    if conversion::exceeds_decimals(raw, card.input_mode.max_decimals(card.token.as_ref())) {
        return;
    }

    let card = explorer.card_mut(side);
    card.display_value = raw.to_string();
    let canonical = match card.input_mode {
        InputMode::Usd => raw.to_string(),
        InputMode::Native => {
            let price = card.token.as_ref().map(|t| t.price).unwrap_or(1.0);
            conversion::usd_from_token(raw, price)
        }
    };
    explorer.usd_amount = canonical;
    explorer.editing = Some(side);
    derive_display(explorer, side.opposite());

    // The spend always happens on the source side, whichever card was edited.
    check_balance_warning(&mut guard, CardSide::Source, now);
}

/// Toggle a card between USD and native input.
///
/// Switching to native derives the new display from the canonical USD amount.
/// Switching back to USD quotes the displayed native amount at the current
/// price and republishes it, so a round trip lands on the quoted value rather
/// than whatever was typed before the first toggle.
pub(crate) fn handle_mode_toggle(state: &Arc<RwLock<AppState>>, side: CardSide) {
    let mut guard = state.write();
    let explorer = &mut guard.explorer;

    let card = explorer.card(side);
    match card.input_mode {
        InputMode::Usd => {
            let display = match card.token.as_ref() {
                Some(token) => conversion::token_from_usd(
                    &explorer.usd_amount,
                    token.price,
                    token.decimals,
                ),
                None => String::new(),
            };
            let card = explorer.card_mut(side);
            card.input_mode = InputMode::Native;
            card.display_value = display;
        }
        InputMode::Native => {
            let price = card.token.as_ref().map(|t| t.price).unwrap_or(1.0);
            let canonical = conversion::usd_from_token(&card.display_value, price);
            explorer.usd_amount = canonical.clone();
            let card = explorer.card_mut(side);
            card.input_mode = InputMode::Usd;
            card.display_value = canonical;
            explorer.editing = Some(side);
            derive_display(explorer, side.opposite());
        }
    }
}

/// Fold a refreshed price into state.
///
/// Replaces the token in the catalog and on any card holding it, then
/// re-derives displays. The actively edited card keeps its typed value: if it
/// is in native mode its canonical USD amount is re-quoted at the new price,
/// and only passive cards have their displays rewritten.
pub(crate) fn handle_price_update(state: &Arc<RwLock<AppState>>, token: crate::app::state::Token) {
    let mut guard = state.write();
    let explorer = &mut guard.explorer;

    for entry in explorer.tokens.iter_mut() {
        if entry.id == token.id {
            *entry = token.clone();
        }
    }
    for side in [CardSide::Source, CardSide::Target] {
        let card = explorer.card_mut(side);
        if card.token.as_ref().map(|t| &t.id) == Some(&token.id) {
            card.token = Some(token.clone());
        }
    }

    if let Some(edited) = explorer.editing {
        let card = explorer.card(edited);
        if card.input_mode == InputMode::Native {
            let price = card.token.as_ref().map(|t| t.price).unwrap_or(1.0);
            explorer.usd_amount = conversion::usd_from_token(&card.display_value, price);
        }
    }
    for side in [CardSide::Source, CardSide::Target] {
        if explorer.editing != Some(side) {
            derive_display(explorer, side);
        }
    }
    guard.needs_repaint = true;
}

/// Rewrite one card's display from the canonical USD amount.
pub(crate) fn derive_display(
    explorer: &mut crate::app::state::ExplorerState,
    side: CardSide,
) {
    let usd = explorer.usd_amount.clone();
    let card = explorer.card_mut(side);
    card.display_value = match card.input_mode {
        InputMode::Usd => usd,
        InputMode::Native => match card.token.as_ref() {
            Some(token) => conversion::token_from_usd(&usd, token.price, token.decimals),
            None => String::new(),
        },
    };
}

/// Warn when the edited amount exceeds the connected wallet's balance, at
/// most once per [`BALANCE_WARNING_INTERVAL`] per card.
fn check_balance_warning(guard: &mut AppState, side: CardSide, now: Instant) {
    let Some(wallet) = guard.wallet.as_ref() else {
        return;
    };
    let card = guard.explorer.card(side);
    let Some(token) = card.token.as_ref() else {
        return;
    };
    let Some(balance) = wallet.native_balance(&token.symbol) else {
        return;
    };

    let needed = match card.input_mode {
        InputMode::Native => card.display_value.parse::<f64>().ok(),
        InputMode::Usd => conversion::token_from_usd(
            &card.display_value,
            token.price,
            token.decimals,
        )
        .parse::<f64>()
        .ok(),
    };
    let Some(needed) = needed else {
        return;
    };
    if needed <= balance {
        return;
    }

    if let Some(last) = card.last_balance_warning {
        if now.duration_since(last) < BALANCE_WARNING_INTERVAL {
            return;
        }
    }

    let message = format!(
        "Your {} balance ({}) is less than the amount you're trying to spend",
        token.symbol, balance
    );
    tracing::warn!(symbol = %token.symbol, balance, needed, "Insufficient balance");
    guard.explorer.card_mut(side).last_balance_warning = Some(now);
    guard.notify("warning", message);
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Token, WalletProvider, WalletState};
    use shared::dto::wallet::TokenBalance;
    use std::collections::HashMap;

    fn token(symbol: &str, decimals: u8, price: f64) -> Token {
        Token {
            id: format!("1-0x{}", symbol.to_lowercase()),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            decimals,
            chain_id: "1".to_string(),
            address: format!("0x{}", symbol.to_lowercase()),
            logo_uri: None,
            price,
        }
    }

    fn test_state() -> Arc<RwLock<AppState>> {
        let mut state = AppState::default();
        state.explorer.source.token = Some(token("USDC", 6, 0.99));
        state.explorer.target.token = Some(token("ETH", 18, 2700.0));
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn usd_edit_republishes_and_derives_opposite() {
        let state = test_state();
        {
            let mut guard = state.write();
            guard.explorer.target.input_mode = InputMode::Native;
        }
        handle_amount_input(&state, CardSide::Source, "10", Instant::now());

        let guard = state.read();
        assert_eq!(guard.explorer.usd_amount, "10");
        assert_eq!(guard.explorer.source.display_value, "10");
        // 10 / 2700 at 18 decimals, trimmed here to a sane display width by
        // the formatter's fixed precision.
        assert!(guard.explorer.target.display_value.starts_with("0.0037037037"));
        assert_eq!(guard.explorer.editing, Some(CardSide::Source));
    }

    #[test]
    fn native_edit_quotes_canonical_with_ceiling() {
        let state = test_state();
        {
            let mut guard = state.write();
            guard.explorer.source.token = Some(token("WBTC", 8, 104_000.0));
            guard.explorer.source.input_mode = InputMode::Native;
        }
        handle_amount_input(&state, CardSide::Source, "0.00001", Instant::now());

        let guard = state.read();
        assert_eq!(guard.explorer.usd_amount, "1.04");
        assert_eq!(guard.explorer.source.display_value, "0.00001");
        assert_eq!(guard.explorer.target.display_value, "1.04");
    }

    #[test]
    fn malformed_input_is_rejected_without_mutation() {
        let state = test_state();
        handle_amount_input(&state, CardSide::Source, "10", Instant::now());
        for bad in ["10.5.1", "1e5", "-3", "1,5", "abc"] {
            handle_amount_input(&state, CardSide::Source, bad, Instant::now());
            let guard = state.read();
            assert_eq!(guard.explorer.source.display_value, "10", "{bad}");
            assert_eq!(guard.explorer.usd_amount, "10", "{bad}");
        }
    }

    #[test]
    fn usd_mode_rejects_more_than_two_decimals() {
        let state = test_state();
        handle_amount_input(&state, CardSide::Source, "1.12", Instant::now());
        handle_amount_input(&state, CardSide::Source, "1.123", Instant::now());
        assert_eq!(state.read().explorer.source.display_value, "1.12");
    }

    #[test]
    fn native_mode_clamps_to_token_decimals() {
        let state = test_state();
        {
            let mut guard = state.write();
            guard.explorer.source.input_mode = InputMode::Native;
        }
        // USDC carries 6 decimals.
        handle_amount_input(&state, CardSide::Source, "1.123456", Instant::now());
        handle_amount_input(&state, CardSide::Source, "1.1234567", Instant::now());
        assert_eq!(state.read().explorer.source.display_value, "1.123456");
    }

    #[test]
    fn mode_toggle_round_trip_lands_on_quoted_value() {
        let state = test_state();
        {
            let mut guard = state.write();
            guard.explorer.target.token = Some(token("ETH", 8, 2700.0));
        }
        handle_amount_input(&state, CardSide::Target, "10", Instant::now());
        handle_mode_toggle(&state, CardSide::Target);
        assert_eq!(state.read().explorer.target.display_value, "0.00370370");

        handle_mode_toggle(&state, CardSide::Target);
        let guard = state.read();
        // 0.00370370 * 2700 = 9.99999, quoted up to the next cent.
        assert_eq!(guard.explorer.target.display_value, "10.00");
        assert_eq!(guard.explorer.usd_amount, "10.00");
    }

    #[test]
    fn price_update_rewrites_passive_card_only() {
        let state = test_state();
        {
            let mut guard = state.write();
            guard.explorer.target.token = Some(token("ETH", 8, 2700.0));
            guard.explorer.target.input_mode = InputMode::Native;
        }
        handle_amount_input(&state, CardSide::Source, "10", Instant::now());
        assert_eq!(state.read().explorer.target.display_value, "0.00370370");

        handle_price_update(&state, token("ETH", 8, 2000.0));
        let guard = state.read();
        assert_eq!(guard.explorer.source.display_value, "10");
        assert_eq!(guard.explorer.usd_amount, "10");
        assert_eq!(guard.explorer.target.display_value, "0.00500000");
        assert_eq!(guard.explorer.target.token.as_ref().unwrap().price, 2000.0);
    }

    #[test]
    fn price_update_requotes_edited_native_card() {
        let state = test_state();
        {
            let mut guard = state.write();
            guard.explorer.source.token = Some(token("WBTC", 8, 104_000.0));
            guard.explorer.source.input_mode = InputMode::Native;
        }
        handle_amount_input(&state, CardSide::Source, "0.00001", Instant::now());
        assert_eq!(state.read().explorer.usd_amount, "1.04");

        handle_price_update(&state, token("WBTC", 8, 100_000.0));
        let guard = state.read();
        // Typed value stays put, the quote follows the new price.
        assert_eq!(guard.explorer.source.display_value, "0.00001");
        assert_eq!(guard.explorer.usd_amount, "1.00");
        assert_eq!(guard.explorer.target.display_value, "1.00");
    }

    #[test]
    fn balance_warning_throttles_repeat_edits() {
        let state = test_state();
        {
            let mut guard = state.write();
            let mut balances = HashMap::new();
            balances.insert(
                "USDC".to_string(),
                TokenBalance {
                    symbol: "USDC".to_string(),
                    balance: "5.0000".to_string(),
                    usd_value: "4.95".to_string(),
                },
            );
            guard.wallet = Some(WalletState {
                provider: WalletProvider::MetaMask,
                address: "0xabc".to_string(),
                balances,
            });
        }

        let t0 = Instant::now();
        handle_amount_input(&state, CardSide::Source, "100", t0);
        handle_amount_input(&state, CardSide::Source, "1000", t0 + Duration::from_secs(1));
        assert_eq!(state.read().pending_notifications.len(), 1);

        handle_amount_input(&state, CardSide::Source, "10000", t0 + Duration::from_secs(4));
        assert_eq!(state.read().pending_notifications.len(), 2);

        // Back under the balance: no warning.
        handle_amount_input(&state, CardSide::Source, "1", t0 + Duration::from_secs(8));
        assert_eq!(state.read().pending_notifications.len(), 2);
    }
}
