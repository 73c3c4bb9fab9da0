//! # Selection Handlers
//!
//! Token-picker lifecycle and the swap-on-reselect rule: choosing the token
//! already held by the opposite card swaps the pair instead of duplicating it,
//! so the two cards never show the same token.

use crate::app::handlers::card::derive_display;
use crate::app::state::{AppState, CardSide, ExplorerState, SelectionState, Token};
use parking_lot::RwLock;
use std::sync::Arc;

/// Open the token picker for one card.
pub(crate) fn open_picker(state: &Arc<RwLock<AppState>>, side: CardSide) {
    let mut guard = state.write();
    guard.explorer.selection = match side {
        CardSide::Source => SelectionState::PickingSource,
        CardSide::Target => SelectionState::PickingTarget,
    };
    guard.explorer.picker_filter.clear();
}

/// Close the picker without changing either card.
pub(crate) fn dismiss_picker(state: &Arc<RwLock<AppState>>) {
    let mut guard = state.write();
    guard.explorer.selection = SelectionState::Idle;
    guard.explorer.picker_filter.clear();
}

/// Confirm a pick from the open dialog.
///
/// No-op when the dialog is not open. Always closes the dialog and clears the
/// edit focus, then re-derives both displays from the canonical amount.
pub(crate) fn confirm_token(state: &Arc<RwLock<AppState>>, token: Token) {
    let mut guard = state.write();
    let Some(side) = guard.explorer.selection.picking_side() else {
        return;
    };
    apply_selection(&mut guard.explorer, side, token);
    guard.explorer.selection = SelectionState::Idle;
    guard.explorer.picker_filter.clear();
    guard.needs_repaint = true;
}

/// One-click assignment from the quick-select row. Always targets the source
/// card and does not involve the dialog. Picking the token already on the
/// source card is a no-op: it must not disturb an in-progress edit.
pub(crate) fn quick_select(state: &Arc<RwLock<AppState>>, token: Token) {
    let mut guard = state.write();
    let already_source =
        guard.explorer.source.token.as_ref().map(|t| &t.id) == Some(&token.id);
    if already_source {
        return;
    }
    apply_selection(&mut guard.explorer, CardSide::Source, token);
    guard.needs_repaint = true;
}

/// Update the picker's search filter as the user types.
pub(crate) fn set_picker_filter(state: &Arc<RwLock<AppState>>, filter: String) {
    state.write().explorer.picker_filter = filter;
}

/// Install `token` on `side`, swapping the pair if the opposite card already
/// holds it.
fn apply_selection(explorer: &mut ExplorerState, side: CardSide, token: Token) {
    let opposite = side.opposite();
    let opposite_holds_it = explorer
        .card(opposite)
        .token
        .as_ref()
        .map(|t| &t.id)
        == Some(&token.id);

    if opposite_holds_it {
        let displaced = explorer.card_mut(side).token.take();
        explorer.card_mut(opposite).token = displaced;
    }
    explorer.card_mut(side).token = Some(token);

    // A fresh pair invalidates the edit focus; both sides re-derive.
    explorer.editing = None;
    derive_display(explorer, CardSide::Source);
    derive_display(explorer, CardSide::Target);
}

// ========== Tests ==========
