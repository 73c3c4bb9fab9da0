//! # Token Picker Widget
//!
//! Modal dialog for choosing a card's token, with a text filter over symbol
//! and name.

use crate::app::state::AppState;
use crate::app::App;
use crate::ui::theme::Theme;
use egui;

/// Render the picker window. Caller checks that the selection dialog is open.
pub fn render_token_picker(ctx: &egui::Context, state: &AppState, app: &App) {
    let theme = Theme::default();

    egui::Window::new("Select token")
        .collapsible(false)
        .resizable(false)
        .default_size([360.0, 420.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let mut filter = state.explorer.picker_filter.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut filter)
                    .hint_text("Search by symbol or name")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                app.set_picker_filter(filter.clone());
            }

            ui.separator();

            let filter_lower = filter.to_lowercase();
            let visible: Vec<_> = state
                .explorer
                .tokens
                .iter()
                .filter(|t| {
                    filter_lower.is_empty()
                        || t.symbol.to_lowercase().contains(&filter_lower)
                        || t.name.to_lowercase().contains(&filter_lower)
                })
                .collect();

            if visible.is_empty() {
                ui.colored_label(theme.colors.dim, "No matching tokens");
            }

            egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                for token in visible {
                    let row = ui.add(
                        egui::Button::new(format!("{}  ·  {}", token.symbol, token.name))
                            .fill(theme.colors.panel)
                            .min_size(egui::Vec2::new(ui.available_width(), 32.0)),
                    );
                    if row.clicked() {
                        app.confirm_token(token.clone());
                    }
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.dismiss_picker();
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.dismiss_picker();
    }
}
