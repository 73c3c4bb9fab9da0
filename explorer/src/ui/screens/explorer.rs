//! # Explorer Screen
//!
//! The main (and only) screen: header with wallet controls, quick-select
//! row, the two linked cards with a swap arrow between them, and the
//! exchange-rate footer.

use crate::app::state::{AppState, CardSide};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::{token_card, wallet_menu};
use egui;

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App) {
    let theme = Theme::default();

    // Header
    ui.horizontal(|ui| {
        ui.heading("Token Explorer");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            wallet_menu::render_wallet_menu(ui, state, app);
        });
    });
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    // Quick-select row: one-click source token assignment.
    if state.explorer.tokens_loading && state.explorer.tokens.is_empty() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(theme.colors.dim, "Loading tokens...");
        });
    } else if !state.explorer.tokens.is_empty() {
        ui.horizontal(|ui| {
            ui.colored_label(theme.colors.dim, "Quick select:");
            for token in &state.explorer.tokens {
                let held_by_source = state
                    .explorer
                    .source
                    .token
                    .as_ref()
                    .map(|t| &t.id)
                    == Some(&token.id);
                let button = egui::Button::new(&token.symbol).fill(if held_by_source {
                    theme.colors.accent
                } else {
                    theme.colors.panel
                });
                if ui.add(button).clicked() {
                    app.quick_select(token.clone());
                }
            }
        });
        ui.add_space(12.0);
    }

    // The pair
    ui.horizontal(|ui| {
        token_card::render_card(ui, state, app, CardSide::Source);
        ui.vertical(|ui| {
            ui.add_space(40.0);
            ui.heading("→");
        });
        token_card::render_card(ui, state, app, CardSide::Target);
    });

    ui.add_space(12.0);

    // Exchange rate footer
    match state.explorer.exchange_rate_line() {
        Some(line) => {
            ui.monospace(line);
        }
        None => {
            ui.colored_label(theme.colors.dim, "Select two tokens to see the rate");
        }
    }
}
