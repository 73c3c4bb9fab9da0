//! # Token Card Widget
//!
//! One side of the swap pair: mode toggle, amount field, token select button
//! and the wallet balance line.

use crate::app::state::{AppState, CardSide, InputMode};
use crate::app::App;
use crate::ui::theme::Theme;
use egui;

/// Render a single card. `state` is the frame snapshot; mutations go through
/// the `app` handlers.
pub fn render_card(ui: &mut egui::Ui, state: &AppState, app: &App, side: CardSide) {
    let theme = Theme::default();
    let card = state.explorer.card(side);

    egui::Frame::group(ui.style())
        .fill(theme.colors.panel)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(260.0);

            ui.horizontal(|ui| {
                ui.colored_label(theme.colors.dim, side.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .small_button(match card.input_mode {
                            InputMode::Usd => "$ USD",
                            InputMode::Native => "◈ Token",
                        })
                        .on_hover_text(card.input_mode.toggle_label())
                        .clicked()
                    {
                        app.toggle_mode(side);
                    }
                });
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let prefix = match card.input_mode {
                    InputMode::Usd => "$",
                    InputMode::Native => "",
                };
                if !prefix.is_empty() {
                    ui.heading(prefix);
                }
                let mut value = card.display_value.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut value)
                        .hint_text("0")
                        .font(egui::TextStyle::Heading)
                        .desired_width(150.0),
                );
                if response.changed() {
                    app.amount_input(side, &value);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = card
                        .token
                        .as_ref()
                        .map(|t| t.symbol.clone())
                        .unwrap_or_else(|| "Select token".to_string());
                    if ui.button(format!("{} ⏷", label)).clicked() {
                        app.open_picker(side);
                    }
                });
            });

            ui.add_space(4.0);

            match card.token.as_ref() {
                Some(token) => {
                    ui.horizontal(|ui| {
                        ui.colored_label(theme.colors.dim, &token.name);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.monospace(format!("${:.2}", token.price));
                            },
                        );
                    });
                    if let Some(balance) = state
                        .wallet
                        .as_ref()
                        .and_then(|w| w.native_balance(&token.symbol))
                    {
                        ui.colored_label(
                            theme.colors.dim,
                            format!("Balance: {:.4} {}", balance, token.symbol),
                        );
                    }
                }
                None => {
                    ui.colored_label(theme.colors.dim, "No token selected");
                }
            }
        });
}
